use leptos::prelude::*;

use crate::components::{
    BenefitsSection, CallToAction, Footer, Hero, PortfolioSection, ServicesSection,
};
use crate::state::{provide_page_state, PageState};
#[cfg(any(feature = "csr", test))]
use crate::services::{
    host::ObserverHost,
    visibility::{track, TrackerOptions},
};

#[component]
pub fn LandingPage() -> impl IntoView {
    let state = provide_page_state();
    start_reveal_tracking(state);

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900">
            <Hero/>
            <BenefitsSection/>
            <PortfolioSection/>
            <ServicesSection/>
            <CallToAction/>
            <Footer/>
        </div>
    }
}

// The observer is attached once the sections are in the DOM. It lives in the
// effect's owner and is released when that owner is cleaned up.
#[cfg(feature = "csr")]
fn start_reveal_tracking(state: PageState) {
    use crate::services::browser::BrowserHost;

    Effect::new(move |_| {
        attach_tracker(&BrowserHost, &TrackerOptions::default(), state);
    });
}

// Nothing to observe outside the browser: every section renders revealed.
#[cfg(not(feature = "csr"))]
fn start_reveal_tracking(state: PageState) {
    use crate::services::visibility::VisibilityStore;

    state.visibility.reveal_all();
}

/// Starts tracking into `state` and tears the tracker down, once, when the
/// current reactive owner is cleaned up.
#[cfg(any(feature = "csr", test))]
fn attach_tracker<H>(host: &H, options: &TrackerOptions, state: PageState)
where
    H: ObserverHost,
    H::Observer: 'static,
{
    let tracker = StoredValue::new_local(Some(track(host, options, state.visibility)));

    on_cleanup(move || {
        tracker.try_update_value(|slot| {
            if let Some(active) = slot.as_mut() {
                active.teardown();
            }
        });
    });
}
