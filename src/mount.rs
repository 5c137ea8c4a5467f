//! Browser entry: attach the widget to the host page.
//!
//! Mounts into the element with id [`MOUNT_ID`] and reads its `data-*`
//! attributes as configuration. Pages without that element get a widget
//! with default settings appended to `<body>`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::chat_widget::ChatWidget;
use crate::config::{MOUNT_ID, WidgetConfig};

/// Mount one widget instance.
pub fn mount_widget() {
    let host = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    if let Some(host) = host {
        let config = WidgetConfig::from_attributes(|name| host.get_attribute(name));
        log::info!("chat widget: mounting into #{MOUNT_ID}, endpoint {}", config.api_base);
        leptos::mount::mount_to(host, move || view! { <ChatWidget config=config/> }).forget();
    } else {
        log::info!("chat widget: #{MOUNT_ID} not found, mounting to body");
        leptos::mount::mount_to_body(|| view! { <ChatWidget/> });
    }
}
