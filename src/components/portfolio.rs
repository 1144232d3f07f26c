use leptos::prelude::*;

use crate::components::{IconView, RevealSection};
use crate::content::PROJECTS;
use crate::models::{Icon, Project, SectionId};
use crate::state::use_page_state;

const OVERLAY: &str = "absolute inset-0 bg-gradient-to-r from-purple-600/20 to-pink-600/20 transition-opacity duration-500";

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Portfolio>
            <div class="text-center mb-16">
                <h2 class="text-4xl font-bold text-white mb-4">"Our Success Stories"</h2>
                <p class="text-xl text-gray-300">"Real solutions we've built for real businesses"</p>
            </div>
            <div class="grid md:grid-cols-2 gap-6">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard index=index project=*project /> })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

/// A portfolio card that highlights while hovered. Projects without a url
/// render no "View Project" link.
#[component]
pub fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let state = use_page_state();
    let overlay_class = move || {
        if state.is_hovered(index) {
            format!("{OVERLAY} opacity-100")
        } else {
            format!("{OVERLAY} opacity-0")
        }
    };

    view! {
        <div
            class="group relative p-8 bg-gradient-to-br from-white/5 to-white/10 backdrop-blur-lg rounded-2xl border border-white/10 hover:border-purple-500/50 transition-all duration-500 overflow-hidden"
            on:mouseenter=move |_| state.hover_enter(index)
            on:mouseleave=move |_| state.hover_leave()
        >
            <div class=overlay_class></div>
            <div class="relative z-10">
                <div class="text-purple-400 mb-4 group-hover:scale-110 transition-transform duration-300">
                    <IconView icon=project.icon class="w-6 h-6" />
                </div>
                <h3 class="text-2xl font-bold text-white mb-3">{project.name}</h3>
                <p class="text-gray-300 mb-4">{project.description}</p>
                {project.link().map(|url| view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link inline-flex items-center gap-2 text-purple-400 hover:text-purple-300 transition-colors group/link"
                    >
                        "View Project"
                        <span class="group-hover/link:translate-x-1 transition-transform">
                            <IconView icon=Icon::ArrowRight class="w-4 h-4" />
                        </span>
                    </a>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::provide_page_state;
    use leptos::tachys::view::RenderHtml;

    fn render_card(index: usize) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_page_state();
            view! { <ProjectCard index=index project=PROJECTS[index] /> }.to_html()
        })
    }

    #[test]
    fn linked_project_shows_view_project() {
        let html = render_card(0);
        assert!(html.contains("View Project"));
        assert!(html.contains("href=\"https://pauseandview.com\""));
    }

    #[test]
    fn placeholder_project_has_no_link() {
        let html = render_card(3);
        assert!(html.contains("AI Personal Assistant"));
        assert!(!html.contains("View Project"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn overlay_follows_hover_state() {
        let owner = Owner::new();
        owner.with(|| {
            let state = provide_page_state();
            state.hover_enter(1);
            let hovered = view! { <ProjectCard index=1 project=PROJECTS[1] /> }.to_html();
            let idle = view! { <ProjectCard index=2 project=PROJECTS[2] /> }.to_html();

            assert!(hovered.contains("opacity-100"));
            assert!(idle.contains("duration-500 opacity-0"));
        });
    }
}
