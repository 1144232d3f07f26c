use leptos::prelude::*;

use crate::components::{ContactButton, IconView};
use crate::models::Icon;
use crate::services::contact::Channel;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-r from-purple-500/20 to-pink-500/20 animate-pulse"></div>
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-20 pb-32">
                <div class="text-center space-y-8">
                    <div class="inline-flex items-center gap-2 px-4 py-2 bg-white/10 backdrop-blur-md rounded-full border border-white/20 text-purple-200 text-sm">
                        <IconView icon=Icon::Zap class="w-4 h-4" />
                        <span>"Automation Solutions for Modern Businesses"</span>
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold text-white leading-tight">
                        "Transform Your Business"
                        <span class="block bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                            "With Smart Automation"
                        </span>
                    </h1>

                    <p class="text-xl md:text-2xl text-gray-300 max-w-3xl mx-auto">
                        "We help small to medium businesses discover and implement workflow automation "
                        "solutions that save time, reduce costs, and drive growth."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center pt-4">
                        <ContactButton
                            channel=Channel::Chat
                            label="Chat on WhatsApp"
                            class="group px-8 py-4 bg-gradient-to-r from-purple-600 to-pink-600 text-white rounded-full font-semibold text-lg hover:shadow-2xl hover:shadow-purple-500/50 transition-all duration-300 hover:scale-105 flex items-center gap-2"
                            arrow=true
                        />
                        <ContactButton
                            channel=Channel::Mail
                            label="Email Us"
                            class="px-8 py-4 bg-white/10 backdrop-blur-md text-white rounded-full font-semibold text-lg border border-white/20 hover:bg-white/20 transition-all duration-300 hover:scale-105 flex items-center gap-2"
                        />
                    </div>
                </div>
            </div>
        </header>
    }
}
