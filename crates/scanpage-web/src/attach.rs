//! Page-ready wiring against the live document

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, Window};

use scanpage_core::{
    Config, CookiePreferenceStore, ModeSync, Page, ResultActions, ScanMode, ThemeController,
};

use crate::binding::bind_theme_controls;
use crate::dom::{
    DocumentCookieJar, DocumentThemeSink, ElementText, MediaQueryScheme, RadioInputs, TabLinks,
    WindowServices,
};
use crate::Result;

const TAB_SHOWN_EVENT: &str = "shown.bs.tab";

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

fn tab_link(document: &Document, target: &str) -> Option<Element> {
    document
        .query_selector(&format!("a[data-bs-target=\"{target}\"]"))
        .ok()
        .flatten()
}

fn elements(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// Dropdown entries carrying a target choice, in document order
fn theme_control_entries(document: &Document, attribute: &str) -> Result<Vec<(Element, String)>> {
    Ok(elements(document, &format!("[{attribute}]"))?
        .into_iter()
        .map(|element| {
            let value = element.get_attribute(attribute).unwrap_or_default();
            (element, value)
        })
        .collect())
}

fn theme_controller(
    window: &Window,
    document: &Document,
    config: &Config,
) -> Option<ThemeController> {
    let jar = DocumentCookieJar::new(document)?;
    Some(ThemeController::new(
        CookiePreferenceStore::with_settings(jar, config.theme_cookie.clone()),
        DocumentThemeSink::new(
            document.clone(),
            config.theme.attribute.clone(),
            config.theme.icon_selector.clone(),
        ),
        MediaQueryScheme::new(window.clone()),
    ))
}

fn mode_sync(document: &Document, config: &Config) -> Option<(ModeSync, RadioInputs, TabLinks)> {
    let modes = &config.modes;
    let radios = RadioInputs {
        webcam: input_by_id(document, &modes.webcam_radio_id)?,
        upload: input_by_id(document, &modes.upload_radio_id)?,
    };
    let tabs = TabLinks {
        webcam: tab_link(document, &modes.webcam_tab_target)?,
        upload: tab_link(document, &modes.upload_tab_target)?,
    };

    let sync = ModeSync::new(radios.checked(), radios.clone(), tabs.clone());
    Some((sync, radios, tabs))
}

fn result_actions(window: &Window, document: &Document, config: &Config) -> Option<ResultActions> {
    let text = document
        .get_element_by_id(&config.result.result_text_id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let services = WindowServices::new(window.clone());
    Some(ResultActions::new(
        ElementText::new(text),
        services.clone(),
        services.clone(),
        services,
        config.actions.clone(),
    ))
}

/// Build the page from whatever elements exist and bind its listeners.
pub fn attach(window: &Window, document: &Document, config: &Config) -> Result<Rc<Page>> {
    let mut builder = Page::builder();

    let entries = theme_control_entries(document, &config.theme.control_attribute)?;
    let (controls, control_elements) = bind_theme_controls(entries);
    let toggle_buttons = elements(document, &config.theme.toggle_selector)?;
    match theme_controller(window, document, config) {
        Some(controller) => builder = builder.theme(controller, controls),
        None => tracing::warn!("Document has no cookie store, theme toggle disabled"),
    }

    let modes = mode_sync(document, config);
    let mode_elements = match modes {
        Some((sync, radios, tabs)) => {
            builder = builder.modes(sync);
            Some((radios, tabs))
        }
        None => {
            tracing::debug!("Scan mode controls not found");
            None
        }
    };

    let copy_button = document.get_element_by_id(&config.result.copy_button_id);
    let open_button = document.get_element_by_id(&config.result.open_link_button_id);
    if copy_button.is_some() || open_button.is_some() {
        if let Some(actions) = result_actions(window, document, config) {
            builder = builder.actions(actions);
        }
    }

    let page = Rc::new(builder.build());

    if page.theme().is_some() {
        for (key, element) in control_elements {
            let page = Rc::clone(&page);
            listen(&element, "click", move |_| {
                if let Err(e) = page.theme_control_clicked(&key) {
                    tracing::warn!(error = %e, "Theme control click ignored");
                }
            })?;
        }
        for button in toggle_buttons {
            let page = Rc::clone(&page);
            listen(&button, "click", move |_| {
                page.theme_toggle_clicked();
            })?;
        }
    }

    if let Some((radios, tabs)) = mode_elements {
        for mode in ScanMode::ALL {
            let input = radios.input(mode).clone();
            let page_for_radio = Rc::clone(&page);
            listen(radios.input(mode), "change", move |_| {
                page_for_radio.radio_changed(mode, input.checked());
            })?;

            let page_for_tab = Rc::clone(&page);
            listen(tabs.link(mode), TAB_SHOWN_EVENT, move |_| {
                page_for_tab.tab_shown(mode);
            })?;
        }
    }

    if page.actions().is_some() {
        if let Some(button) = copy_button {
            let page = Rc::clone(&page);
            listen(&button, "click", move |_| {
                page.copy_clicked();
            })?;
        }
        if let Some(button) = open_button {
            let page = Rc::clone(&page);
            listen(&button, "click", move |_| {
                page.open_link_clicked();
            })?;
        }
    }

    Ok(page)
}
