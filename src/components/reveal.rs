use leptos::prelude::*;

use crate::models::SectionId;
use crate::state::use_page_state;

const HIDDEN: &str =
    "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 transition-all duration-1000 opacity-0 translate-y-10";
const SHOWN: &str =
    "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 transition-all duration-1000 opacity-100 translate-y-0";

/// Classes for a section given whether it has been revealed.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        SHOWN
    } else {
        HIDDEN
    }
}

/// A page section that fades and slides in once it is first scrolled into view.
#[component]
pub fn RevealSection(section: SectionId, children: Children) -> impl IntoView {
    let state = use_page_state();

    view! {
        <section id=section.dom_id() class=move || reveal_class(state.is_visible(section))>
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_sections_are_transparent_and_offset() {
        let class = reveal_class(false);
        assert!(class.contains("opacity-0"));
        assert!(class.contains("translate-y-10"));
    }

    #[test]
    fn revealed_sections_are_settled() {
        let class = reveal_class(true);
        assert!(class.contains("opacity-100"));
        assert!(class.contains("translate-y-0"));
        assert!(!class.contains("opacity-0 "));
    }

    #[test]
    fn both_states_share_the_transition() {
        for visible in [false, true] {
            assert!(reveal_class(visible).contains("transition-all duration-1000"));
        }
    }
}
