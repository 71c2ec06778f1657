//! Pure animation and scroll math used by the DOM behaviors

pub mod counter;
pub mod scroll;
pub mod toast;

pub use counter::{lerp, progress, CounterAnimation, CounterFrame};
pub use scroll::{
    active_section, back_to_top_visible, parallax_speed, parallax_transform, SectionOffset,
};
pub use toast::ToastState;
