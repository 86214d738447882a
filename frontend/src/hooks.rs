use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{FADE_IN_ROOT_MARGIN, FADE_IN_SELECTOR, FADE_IN_STAGGER_MS, FADE_IN_THRESHOLD};
use crate::dom::{self, Observer, WindowListener};
use crate::error::PageError;
use crate::motion::easing::stagger;
use crate::motion::entrance::Entrance;
use crate::motion::parallax::hero_parallax;
use crate::motion::scroll::ScrollAnimator;

/// The page-wide animator provided by `App`.
#[hook]
pub fn use_scroll_animator() -> ScrollAnimator {
    use_context::<ScrollAnimator>().unwrap_or_default()
}

/// Whether the window has scrolled further than `threshold` pixels.
/// Re-renders only when the answer flips.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let past = use_state_eq(|| dom::scroll_y().map(|y| y > threshold).unwrap_or(false));

    {
        let past = past.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = WindowListener::new("scroll", move || {
                    if let Ok(y) = dom::scroll_y() {
                        past.set(y > threshold);
                    }
                })
                .map_err(|e| warn!("Scroll listener unavailable: {}", e))
                .ok();
                move || drop(listener)
            },
            threshold,
        );
    }

    *past
}

/// Adds `visible` to every `.fade-in` element the first time it scrolls
/// into view, staggering elements that arrive together.
#[hook]
pub fn use_fade_in_reveal() {
    use_effect_with_deps(
        |_| {
            let observer = observe_fade_ins()
                .map_err(|e| warn!("Fade-in reveal disabled: {}", e))
                .ok();
            move || drop(observer)
        },
        (),
    );
}

fn observe_fade_ins() -> Result<Observer, PageError> {
    let observer = Observer::new(
        FADE_IN_THRESHOLD,
        Some(FADE_IN_ROOT_MARGIN),
        |entries, observer| {
            for (index, entry) in entries.into_iter().enumerate() {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                Timeout::new(stagger(index, FADE_IN_STAGGER_MS), move || {
                    dom::add_class(&target, "visible");
                })
                .forget();
            }
        },
    )?;

    for element in dom::query_all(FADE_IN_SELECTOR)? {
        observer.observe(&element);
    }
    Ok(observer)
}

/// Fades and drifts the hero content and chat as the page scrolls away
/// from them. At most one update per animation frame.
#[hook]
pub fn use_hero_parallax(content: NodeRef, chat: NodeRef) {
    use_effect_with_deps(
        move |_| {
            let ticking = Rc::new(Cell::new(false));
            let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

            let listener = {
                let frame = frame.clone();
                WindowListener::new("scroll", move || {
                    if ticking.get() {
                        return;
                    }
                    ticking.set(true);
                    let ticking = ticking.clone();
                    let content = content.clone();
                    let chat = chat.clone();
                    let handle = request_animation_frame(move |_| {
                        apply_parallax(&content, &chat);
                        ticking.set(false);
                    });
                    *frame.borrow_mut() = Some(handle);
                })
            }
            .map_err(|e| warn!("Parallax disabled: {}", e))
            .ok();

            move || {
                drop(listener);
                frame.borrow_mut().take();
            }
        },
        (),
    );
}

fn apply_parallax(content: &NodeRef, chat: &NodeRef) {
    let (Ok(scroll_y), Ok(height)) = (dom::scroll_y(), dom::viewport_height()) else {
        return;
    };
    let Some(parallax) = hero_parallax(scroll_y, height) else {
        return;
    };

    if let Some(content) = content.cast::<Element>() {
        dom::set_style(&content, "opacity", &parallax.content_opacity.to_string());
        dom::set_style(
            &content,
            "transform",
            &format!("translateY({}px)", parallax.content_shift_px),
        );
    }
    if let Some(chat) = chat.cast::<Element>() {
        dom::set_style(
            &chat,
            "transform",
            &format!("translateY({}px)", parallax.chat_shift_px),
        );
    }
}

/// Fades the body in from slightly below once the window has loaded.
#[hook]
pub fn use_page_entrance() {
    use_effect_with_deps(
        |_| {
            let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
            let listener = {
                let frame = frame.clone();
                dom::on_page_load(move || {
                    let Ok(body) = dom::body() else {
                        return;
                    };
                    apply_entrance(&body, Entrance::Hidden);
                    let handle = request_animation_frame(move |_| apply_entrance(&body, Entrance::Shown));
                    *frame.borrow_mut() = Some(handle);
                })
            }
            .map_err(|e| warn!("Page entrance skipped: {}", e))
            .ok()
            .flatten();

            move || {
                drop(listener);
                frame.borrow_mut().take();
            }
        },
        (),
    );
}

fn apply_entrance(element: &Element, entrance: Entrance) {
    for (property, value) in entrance.styles() {
        dom::set_style(element, property, &value);
    }
}
