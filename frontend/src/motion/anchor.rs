use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;

use crate::config::{
    NAVBAR_SELECTOR, NAV_SCROLL_DURATION_MS, SECTION_FOCUS_CLASS, SECTION_FOCUS_DELAY_MS,
    SECTION_FOCUS_HOLD_MS,
};
use crate::dom;
use crate::motion::scroll::ScrollAnimator;

/// Element id named by an in-page link, e.g. `"#pricing"` -> `"pricing"`.
/// A bare `#` or anything that is not a fragment names nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Scroll offset that puts a section's top edge just below the navbar.
pub fn section_offset(section_top: f64, nav_height: f64) -> f64 {
    section_top - nav_height
}

/// What a click on an in-page link should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPlan {
    /// Scroll offset to animate to.
    pub target: f64,
    /// Delay before the section is flashed.
    pub focus_at_ms: u32,
    /// How long the flash stays on.
    pub focus_for_ms: u32,
}

/// Resolves `href` through `lookup_top`, which returns the document-relative
/// top of the element with the given id. `None` when `href` is not a
/// fragment or names nothing on the page.
pub fn plan<F>(href: &str, lookup_top: F, nav_height: f64) -> Option<AnchorPlan>
where
    F: FnOnce(&str) -> Option<f64>,
{
    let id = fragment_id(href)?;
    let section_top = lookup_top(id)?;
    Some(AnchorPlan {
        target: section_offset(section_top, nav_height),
        focus_at_ms: SECTION_FOCUS_DELAY_MS,
        focus_for_ms: SECTION_FOCUS_HOLD_MS,
    })
}

/// Smooth-scrolls to the section named by `href` and flashes it once the
/// scroll has had time to settle. Returns `false` when nothing matched.
pub fn navigate(href: &str, animator: &ScrollAnimator) -> bool {
    let mut section = None;
    let lookup = |id: &str| {
        let element = dom::element_by_id(id)?;
        let top = dom::document_top(&element)
            .map_err(|e| warn!("Cannot measure section {}: {}", id, e))
            .ok()?;
        section = Some(element);
        Some(top)
    };

    let planned = plan(href, lookup, dom::offset_height(NAVBAR_SELECTOR));
    let (Some(plan), Some(section)) = (planned, section) else {
        debug!("No section for anchor {}", href);
        return false;
    };

    animator.scroll_to(plan.target, NAV_SCROLL_DURATION_MS);
    Timeout::new(plan.focus_at_ms, move || highlight(section, plan.focus_for_ms)).forget();
    true
}

fn highlight(section: Element, hold_ms: u32) {
    dom::remove_class(&section, SECTION_FOCUS_CLASS);
    dom::force_reflow(&section);
    dom::add_class(&section, SECTION_FOCUS_CLASS);
    Timeout::new(hold_ms, move || {
        dom::remove_class(&section, SECTION_FOCUS_CLASS);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#pricing"), Some("pricing"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/pricing"), None);
    }

    #[test]
    fn offset_clears_the_navbar() {
        assert_eq!(section_offset(1800.0, 60.0), 1740.0);
        assert_eq!(section_offset(1800.0, 0.0), 1800.0);
    }

    fn page(id: &str) -> Option<f64> {
        match id {
            "pricing" => Some(2400.0),
            "features" => Some(900.0),
            _ => None,
        }
    }

    #[test]
    fn pricing_link_scrolls_below_navbar_then_flashes() {
        let plan = plan("#pricing", page, 60.0).unwrap();
        assert_eq!(
            plan,
            AnchorPlan {
                target: 2340.0,
                focus_at_ms: 850,
                focus_for_ms: 900,
            }
        );
    }

    #[test]
    fn flash_waits_for_the_scroll_to_settle() {
        let plan = plan("#features", page, 0.0).unwrap();
        assert!(plan.focus_at_ms as f64 > NAV_SCROLL_DURATION_MS);
        assert_eq!(plan.target, 900.0);
    }

    #[test]
    fn missing_section_does_nothing() {
        assert_eq!(plan("#missing", page, 60.0), None);
    }

    #[test]
    fn bare_hash_never_looks_anything_up() {
        let lookup = |id: &str| -> Option<f64> { panic!("looked up {:?}", id) };
        assert_eq!(plan("#", lookup, 60.0), None);
        assert_eq!(plan("", lookup, 60.0), None);
    }
}
