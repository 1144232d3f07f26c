//! Runs in a headless browser: `wasm-pack test --headless --firefox -- --features csr`

#![cfg(all(target_arch = "wasm32", feature = "csr"))]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use automation_landing::models::SectionId;
use automation_landing::services::browser::BrowserHost;
use automation_landing::services::host::{EntrySink, ObserverHost, SectionObserver};
use automation_landing::services::visibility::{
    track, IntersectionEntry, TrackerOptions, VisibilityState,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_element(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("section").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

/// Resolves after the browser has had time to deliver queued observer entries.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 50)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn counting_sink() -> (EntrySink, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let sink: EntrySink = {
        let calls = Rc::clone(&calls);
        Rc::new(move |_: &[IntersectionEntry]| calls.set(calls.get() + 1))
    };
    (sink, calls)
}

#[wasm_bindgen_test]
fn observes_only_known_sections() {
    let known = add_element(SectionId::Portfolio.dom_id());
    let unknown = add_element("section-pricing");

    let (sink, _) = counting_sink();
    let mut observer = BrowserHost
        .connect(&TrackerOptions::default(), sink)
        .unwrap();
    assert_eq!(observer.observed(), 1);
    observer.disconnect();

    known.remove();
    unknown.remove();
}

#[wasm_bindgen_test]
async fn observer_delivers_initial_entries() {
    let element = add_element(SectionId::Services.dom_id());

    let (sink, calls) = counting_sink();
    let mut observer = BrowserHost
        .connect(&TrackerOptions::default(), sink)
        .unwrap();
    settle().await;
    assert!(calls.get() > 0);

    observer.disconnect();
    element.remove();
}

#[wasm_bindgen_test]
async fn dropped_observer_stops_calling_back() {
    let element = add_element(SectionId::Cta.dom_id());

    let (sink, calls) = counting_sink();
    let observer = BrowserHost
        .connect(&TrackerOptions::default(), sink)
        .unwrap();
    drop(observer);
    settle().await;
    assert_eq!(calls.get(), 0);

    element.remove();
}

#[wasm_bindgen_test]
fn tracker_teardown_is_idempotent() {
    let element = add_element(SectionId::Benefits.dom_id());
    let store = Rc::new(RefCell::new(VisibilityState::default()));

    let mut tracker = track(&BrowserHost, &TrackerOptions::default(), store.clone());
    assert!(tracker.is_observing());

    tracker.teardown();
    tracker.teardown();
    assert!(!tracker.is_live());
    assert!(!tracker.is_observing());

    element.remove();
}
