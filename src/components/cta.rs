use leptos::prelude::*;

use crate::components::{ContactButton, RevealSection};
use crate::models::SectionId;
use crate::services::contact::Channel;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Cta>
            <div class="relative overflow-hidden bg-gradient-to-r from-purple-600 to-pink-600 rounded-3xl p-12 md:p-16 text-center">
                <div class="absolute inset-0 bg-black/20"></div>
                <div class="relative z-10 space-y-6">
                    <h2 class="text-4xl md:text-5xl font-bold text-white">"Ready to Transform Your Business?"</h2>
                    <p class="text-xl text-white/90 max-w-2xl mx-auto">
                        "Let's discuss how automation can help you save time, reduce costs, and scale your operations."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center pt-4">
                        <ContactButton
                            channel=Channel::Chat
                            label="Start WhatsApp Chat"
                            class="group px-8 py-4 bg-white text-purple-600 rounded-full font-semibold text-lg hover:shadow-2xl hover:shadow-white/50 transition-all duration-300 hover:scale-105 flex items-center gap-2"
                            arrow=true
                        />
                        <ContactButton
                            channel=Channel::Mail
                            label="Send an Email"
                            class="px-8 py-4 bg-white/20 backdrop-blur-md text-white rounded-full font-semibold text-lg border-2 border-white hover:bg-white/30 transition-all duration-300 hover:scale-105 flex items-center gap-2"
                        />
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
