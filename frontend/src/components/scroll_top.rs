use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{SCROLL_TOP_DURATION_MS, SCROLL_TOP_VISIBLE_AFTER_PX};
use crate::hooks::{use_scroll_animator, use_scrolled_past};

#[function_component(ScrollTop)]
pub fn scroll_top() -> Html {
    let visible = use_scrolled_past(SCROLL_TOP_VISIBLE_AFTER_PX);
    let animator = use_scroll_animator();

    let onclick = Callback::from(move |_: MouseEvent| animator.scroll_to(0.0, SCROLL_TOP_DURATION_MS));

    html! {
        <button
            id="scrollTop"
            class={classes!("scroll-top", visible.then(|| "visible"))}
            aria-label="Back to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
