//! Scroll-position math for parallax, scrollspy and the back-to-top button

/// Speed used when a `data-parallax` value is missing or not a number
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.3;

/// Parse a `data-parallax` speed factor
pub fn parallax_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

/// Vertical offset (px) for a parallax layer at the given scroll position
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// CSS transform for a parallax layer
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({:.1}px)", parallax_offset(scroll_y, speed))
}

/// Whether the back-to-top button should be shown
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// A page section tracked by the scrollspy
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    /// Distance from the document top, in px
    pub top: f64,
}

/// Pick the section currently in view.
///
/// Sections are in document order. The active one is the last section whose
/// top is at or above `scroll_y + offset`; `None` while the page is still
/// above the first section.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, offset: f64) -> Option<&str> {
    let line = scroll_y + offset;
    sections
        .iter()
        .take_while(|s| s.top <= line)
        .last()
        .map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        [("about", 600.0), ("projects", 1400.0), ("contact", 2600.0)]
            .into_iter()
            .map(|(id, top)| SectionOffset { id: id.to_string(), top })
            .collect()
    }

    #[test]
    fn test_active_section() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0, 120.0), None);
        assert_eq!(active_section(&s, 480.0, 120.0), Some("about"));
        assert_eq!(active_section(&s, 1300.0, 120.0), Some("projects"));
        assert_eq!(active_section(&s, 9000.0, 120.0), Some("contact"));
    }

    #[test]
    fn test_active_section_empty() {
        assert_eq!(active_section(&[], 100.0, 0.0), None);
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_speed(Some("0.5")), 0.5);
        assert_eq!(parallax_speed(Some("fast")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_speed(None), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_transform(200.0, 0.5), "translateY(100.0px)");
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(400.0, 400.0));
        assert!(back_to_top_visible(401.0, 400.0));
    }
}
