use leptos::prelude::*;

use crate::components::{IconView, RevealSection};
use crate::content::BENEFITS;
use crate::models::{Benefit, SectionId};

#[component]
pub fn BenefitsSection() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Benefits>
            <h2 class="text-4xl font-bold text-white text-center mb-16">"Why Automate Your Workflows?"</h2>
            <div class="grid md:grid-cols-3 gap-8">
                {BENEFITS.iter().map(|benefit| view! { <BenefitCard benefit=*benefit /> }).collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn BenefitCard(benefit: Benefit) -> impl IntoView {
    view! {
        <div class="group p-8 bg-white/5 backdrop-blur-lg rounded-2xl border border-white/10 hover:border-purple-500/50 hover:bg-white/10 transition-all duration-300 hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/20">
            <div class="text-purple-400 mb-4 group-hover:scale-110 transition-transform duration-300">
                <IconView icon=benefit.icon class="w-8 h-8" />
            </div>
            <h3 class="text-2xl font-bold text-white mb-3">{benefit.title}</h3>
            <p class="text-gray-300">{benefit.description}</p>
        </div>
    }
}
