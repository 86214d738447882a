use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::config::NAVBAR_SCROLLED_AFTER_PX;
use crate::hooks::use_scrolled_past;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub items: Vec<NavItem>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(NAVBAR_SCROLLED_AFTER_PX);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let open_class = (*menu_open).then(|| "active");

    html! {
        <nav id="navbar" class={classes!("navbar", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <AnchorLink href="#hero" class="nav-logo" on_navigate={close_menu.clone()}>
                    { props.brand.clone() }
                </AnchorLink>

                <button
                    id="menuToggle"
                    class={classes!("menu-toggle", open_class)}
                    aria-label="Menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul id="navMenu" class={classes!("nav-menu", open_class)}>
                    { for props.items.iter().map(|item| html! {
                        <li>
                            <AnchorLink href={item.href} class="nav-link" on_navigate={close_menu.clone()}>
                                { item.label }
                            </AnchorLink>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
