use leptos::prelude::*;

use crate::components::IconView;
use crate::models::Icon;
use crate::services::contact::Channel;

fn send(channel: Channel) {
    #[cfg(feature = "csr")]
    {
        use crate::services::browser::BrowserNavigator;
        use crate::services::contact::dispatch;

        dispatch(&BrowserNavigator, channel);
    }
    #[cfg(not(feature = "csr"))]
    let _ = channel;
}

/// A call-to-action button that routes to `channel` when clicked.
#[component]
pub fn ContactButton(
    channel: Channel,
    label: &'static str,
    class: &'static str,
    /// Show a trailing arrow that nudges right on hover
    #[prop(optional)]
    arrow: bool,
) -> impl IntoView {
    let icon = match channel {
        Channel::Chat => Icon::MessageCircle,
        Channel::Mail => Icon::Mail,
    };

    view! {
        <button type="button" class=class on:click=move |_| send(channel)>
            <IconView icon=icon />
            {label}
            {arrow.then(|| view! {
                <span class="group-hover:translate-x-1 transition-transform">
                    <IconView icon=Icon::ArrowRight />
                </span>
            })}
        </button>
    }
}
