use leptos::logging::debug_warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::models::{SectionId, SECTION_PREFIX};
use crate::services::host::{EntrySink, HostError, Navigator, ObserverHost, SectionObserver};
use crate::services::visibility::{IntersectionEntry, TrackerOptions};

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        HostError::Js(message)
    }
}

/// The page's `window`.
pub struct BrowserHost;

/// An `IntersectionObserver` plus the closure it calls back into.
pub struct BrowserObserver {
    observer: IntersectionObserver,
    observed: u32,
    // Must outlive the observer's registration.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl BrowserObserver {
    /// Number of section elements being observed.
    pub fn observed(&self) -> u32 {
        self.observed
    }
}

impl SectionObserver for BrowserObserver {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

// The callback is freed with `self`; the observer must stop calling it first.
impl Drop for BrowserObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ObserverHost for BrowserHost {
    type Observer = BrowserObserver;

    fn connect(
        &self,
        options: &TrackerOptions,
        sink: EntrySink,
    ) -> Result<BrowserObserver, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let supported =
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(HostError::ObserverUnsupported);
        }
        let document = window.document().ok_or(HostError::NoDocument)?;
        let nodes = document.query_selector_all(&format!("[id^=\"{SECTION_PREFIX}\"]"))?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry::new(entry.target().id(), entry.is_intersecting()))
                    .collect();
                sink(&batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold()));
        init.set_root_margin(options.root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let mut observed = 0;
        for i in 0..nodes.length() {
            let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            if SectionId::from_dom_id(&element.id()).is_none() {
                debug_warn!("not tracking unknown section element #{}", element.id());
                continue;
            }
            observer.observe(&element);
            observed += 1;
        }

        Ok(BrowserObserver {
            observer,
            observed,
            _callback: callback,
        })
    }
}

/// Navigation through `window.open` and `window.location`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_in_new_context(&self, uri: &str) -> Result<(), HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        match window.open_with_url_and_target(uri, "_blank")? {
            Some(_) => Ok(()),
            None => Err(HostError::PopupBlocked),
        }
    }

    fn navigate(&self, uri: &str) -> Result<(), HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        window.location().set_href(uri)?;
        Ok(())
    }
}
