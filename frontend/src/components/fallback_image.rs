use log::warn;
use web_sys::Event;
use yew::prelude::*;

use crate::config::{PLACEHOLDER_IMAGE_ALT, PLACEHOLDER_IMAGE_URL};

const FADE: &str = "transition: opacity 0.4s cubic-bezier(0.4, 0, 0.2, 1);";

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that fades in once loaded and swaps to a placeholder if the
/// source fails. The swap happens once; a failing placeholder is left alone.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state_eq(|| false);
    let loaded = use_state_eq(|| false);

    let onerror = {
        let failed = failed.clone();
        let loaded = loaded.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if !*failed {
                warn!("Image {} failed to load, showing placeholder", src);
                loaded.set(false);
                failed.set(true);
            }
        })
    };

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    let (src, alt) = if *failed {
        (AttrValue::from(PLACEHOLDER_IMAGE_URL), AttrValue::from(PLACEHOLDER_IMAGE_ALT))
    } else {
        (props.src.clone(), props.alt.clone())
    };

    let style = format!(
        "opacity: {}; {}{}",
        if *loaded { 1 } else { 0 },
        FADE,
        if *failed { " border-radius: 20px;" } else { "" },
    );

    html! {
        <img {src} {alt} class={props.class.clone()} {style} {onload} {onerror} />
    }
}
