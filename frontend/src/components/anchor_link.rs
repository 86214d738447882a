use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_scroll_animator;
use crate::motion::anchor;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after a successful in-page navigation.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that smooth-scrolls instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let animator = use_scroll_animator();

    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if anchor::navigate(&href, &animator) {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
