use leptos::prelude::*;

use crate::components::{IconView, RevealSection};
use crate::content::SERVICES;
use crate::models::{Icon, SectionId, Service};

#[component]
pub fn ServicesSection() -> impl IntoView {
    let (left, right) = SERVICES.split_at(SERVICES.len().div_ceil(2));

    view! {
        <RevealSection section=SectionId::Services>
            <div class="bg-gradient-to-r from-purple-600/20 to-pink-600/20 backdrop-blur-lg rounded-3xl border border-white/20 p-12">
                <h2 class="text-4xl font-bold text-white text-center mb-8">"What We Do"</h2>
                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    <ServiceColumn services=left />
                    <ServiceColumn services=right />
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ServiceColumn(services: &'static [Service]) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {services
                .iter()
                .map(|service| view! {
                    <div class="flex items-start gap-3">
                        <span class="text-green-400 flex-shrink-0 mt-1">
                            <IconView icon=Icon::CheckCircle class="w-6 h-6" />
                        </span>
                        <div>
                            <h3 class="text-xl font-semibold text-white mb-2">{service.title}</h3>
                            <p class="text-gray-300">{service.description}</p>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
