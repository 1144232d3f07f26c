use leptos::prelude::*;
use leptos_meta::*;

use crate::content::BRAND_NAME;
use crate::pages::LandingPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{BRAND_NAME} - Smart Automation for SMBs")/>
        <Meta name="description" content="Workflow automation that saves time, cuts costs and boosts efficiency for small and medium businesses"/>

        <main>
            <LandingPage/>
        </main>
    }
}
