use leptos::prelude::*;

use crate::components::IconView;
use crate::content::{BRAND_NAME, CONTACT_EMAIL, COPYRIGHT, PHONE_DISPLAY, TAGLINE};
use crate::models::Icon;
use crate::services::contact::{CHAT_URI, MAIL_URI};

/// Footer with plain links to both contact channels.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/10 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="text-center md:text-left">
                        <h3 class="text-2xl font-bold text-white mb-2">{BRAND_NAME}</h3>
                        <p class="text-gray-400">{TAGLINE}</p>
                    </div>
                    <div class="flex flex-col gap-3">
                        <a
                            href=CHAT_URI
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 text-gray-300 hover:text-white transition-colors"
                        >
                            <IconView icon=Icon::MessageCircle />
                            {PHONE_DISPLAY}
                        </a>
                        <a
                            href=MAIL_URI
                            class="flex items-center gap-2 text-gray-300 hover:text-white transition-colors"
                        >
                            <IconView icon=Icon::Mail />
                            {CONTACT_EMAIL}
                        </a>
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t border-white/10 text-center text-gray-400">
                    <p>{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}
