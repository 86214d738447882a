//! Thin wrappers over the `web_sys` calls the page behaviors share.
//!
//! Everything here returns `Result<_, PageError>` or silently does nothing;
//! the visitor never sees a failure from this layer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn body() -> Result<HtmlElement, PageError> {
    document()?.body().ok_or(PageError::NoBody)
}

pub fn scroll_y() -> Result<f64, PageError> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_height() -> Result<f64, PageError> {
    let height = window()?.inner_height()?;
    height
        .as_f64()
        .ok_or_else(|| PageError::Js("innerHeight is not a number".to_string()))
}

pub fn scroll_window_to(y: f64) {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, PageError> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Offset height of the first element matching `selector`, 0 if absent.
pub fn offset_height(selector: &str) -> f64 {
    document()
        .ok()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Top edge of `element` measured from the top of the document.
pub fn document_top(element: &Element) -> Result<f64, PageError> {
    Ok(element.get_bounding_client_rect().top() + scroll_y()?)
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

/// Reads layout so a class removed and re-added in the same task restarts
/// its CSS animation.
pub fn force_reflow(element: &Element) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.offset_width();
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

/// Window event listener that unregisters itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, callback: F) -> Result<Self, PageError>
    where
        F: FnMut() + 'static,
    {
        let window = window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Runs `callback` once the window `load` event has fired: right away if
/// the page already finished loading, otherwise from the returned listener,
/// which must be kept alive until then.
pub fn on_page_load<F>(callback: F) -> Result<Option<WindowListener>, PageError>
where
    F: FnOnce() + 'static,
{
    if document()?.ready_state() == "complete" {
        callback();
        return Ok(None);
    }
    let mut callback = Some(callback);
    WindowListener::new("load", move || {
        if let Some(callback) = callback.take() {
            callback();
        }
    })
    .map(Some)
}

/// Owned `IntersectionObserver`. Disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_entries: F) -> Result<Self, PageError>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            on_entries(entries, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
