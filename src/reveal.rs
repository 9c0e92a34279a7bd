//! Fade-in reveal policy: which class marks a revealed element, when the
//! viewport watcher fires, and the exact styles on both sides of the
//! transition.

/// Class added to an element the first time it intersects the viewport.
/// Never removed; scrolling an element back out does not re-hide it.
pub const MARKER_CLASS: &str = "visible";

/// Selector matching every marked element.
pub const MARKER_SELECTOR: &str = ".visible";

/// Fraction of an element that must be visible before it is marked.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Start state forced onto every watched element at attach. The transition
/// is registered up front so the marker's style change animates.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "all 0.6s cubic-bezier(0.16, 1, 0.3, 1)"),
];

/// End state re-applied to marked elements every frame.
pub const SHOWN_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_selector_derives_from_the_class() {
        assert_eq!(MARKER_SELECTOR, format!(".{MARKER_CLASS}"));
    }

    #[test]
    fn watcher_fires_at_a_tenth_visible() {
        assert_eq!(INTERSECTION_THRESHOLD, 0.1);
    }

    #[test]
    fn hidden_style_pins_the_start_state() {
        assert_eq!(
            HIDDEN_STYLE,
            [
                ("opacity", "0"),
                ("transform", "translateY(20px)"),
                ("transition", "all 0.6s cubic-bezier(0.16, 1, 0.3, 1)"),
            ]
        );
    }

    #[test]
    fn shown_style_completes_the_transition() {
        assert_eq!(SHOWN_STYLE, [("opacity", "1"), ("transform", "translateY(0)")]);
    }

    #[test]
    fn shown_style_touches_only_hidden_properties() {
        for (prop, _) in SHOWN_STYLE {
            assert!(HIDDEN_STYLE.iter().any(|(hidden_prop, _)| *hidden_prop == prop));
        }
    }
}
