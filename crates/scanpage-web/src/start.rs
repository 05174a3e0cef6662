//! Module entry point and functions exported to page markup

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use scanpage_core::{Config, Page};

use crate::attach::attach;
use crate::binding::{page_config, CONFIG_ELEMENT_ID};
use crate::error::WebError;
use crate::logging::init_logging;
use crate::Result;

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

fn ready(window: &Window, document: &Document, config: &Config) -> Result<()> {
    let page = attach(window, document, config)?;
    page.ready();
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let embedded = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = match page_config(embedded.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!(error = %e, "Invalid page configuration");
            return Err(e.into());
        }
    };
    init_logging(&config.log_filter);

    if document.ready_state() == "loading" {
        let win = window.clone();
        let doc = document.clone();
        let on_ready = Closure::once(move || {
            if let Err(e) = ready(&win, &doc, &config) {
                tracing::error!(error = %e, "Page initialization failed");
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        ready(&window, &document, &config)?;
    }

    Ok(())
}

/// Compact theme toggle for script callers.
///
/// This is a module export, not a global: markup `onclick` handlers need
/// the host's loader to put it on `window`. Buttons matching the configured
/// toggle selector are bound without it.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    let page = PAGE.with(|slot| slot.borrow().clone());
    match page {
        Some(page) => {
            page.theme_toggle_clicked();
        }
        None => tracing::debug!("Theme toggle before page ready"),
    }
}
