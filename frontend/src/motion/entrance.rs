use crate::config::{PAGE_ENTRANCE_DURATION_S, PAGE_ENTRANCE_EASING, PAGE_ENTRANCE_OFFSET_PX};

/// Inline styles for the body fade-in played once the window has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// Applied on `load`: transparent and pushed down.
    Hidden,
    /// Applied on the following animation frame.
    Shown,
}

impl Entrance {
    pub fn styles(self) -> Vec<(&'static str, String)> {
        match self {
            Entrance::Hidden => vec![
                ("opacity", "0".to_string()),
                (
                    "transform",
                    format!("translateY({}px)", PAGE_ENTRANCE_OFFSET_PX),
                ),
            ],
            Entrance::Shown => vec![
                (
                    "transition",
                    format!(
                        "opacity {d}s {e}, transform {d}s {e}",
                        d = PAGE_ENTRANCE_DURATION_S,
                        e = PAGE_ENTRANCE_EASING
                    ),
                ),
                ("opacity", "1".to_string()),
                ("transform", "translateY(0)".to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(entrance: Entrance, property: &str) -> Option<String> {
        entrance
            .styles()
            .into_iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    #[test]
    fn starts_hidden_and_lowered() {
        assert_eq!(style(Entrance::Hidden, "opacity").as_deref(), Some("0"));
        assert_eq!(
            style(Entrance::Hidden, "transform").as_deref(),
            Some("translateY(20px)")
        );
        assert_eq!(style(Entrance::Hidden, "transition"), None);
    }

    #[test]
    fn settles_over_six_tenths_of_a_second() {
        assert_eq!(
            style(Entrance::Shown, "transition").as_deref(),
            Some("opacity 0.6s cubic-bezier(0.4, 0, 0.2, 1), transform 0.6s cubic-bezier(0.4, 0, 0.2, 1)")
        );
        assert_eq!(style(Entrance::Shown, "opacity").as_deref(), Some("1"));
        assert_eq!(
            style(Entrance::Shown, "transform").as_deref(),
            Some("translateY(0)")
        );
    }

    #[test]
    fn transition_is_set_before_the_target_values() {
        let names: Vec<_> = Entrance::Shown.styles().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["transition", "opacity", "transform"]);
    }
}
