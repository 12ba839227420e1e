use leptos::{either::Either, prelude::*};

use crate::content::Project;

use super::reveal::RevealSection;

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <RevealSection id="projects" title="Projects" subtitle="A few things I've built and automated">
            <div class="grid gap-6 sm:grid-cols-2">
                {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let title = match project.link.as_ref() {
        Some(link) => Either::Left(view! {
            <a
                href=link.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="hover:text-portfolio-accent1 transition-colors duration-200"
            >
                {project.title.clone()}
            </a>
        }),
        None => Either::Right(project.title.clone()),
    };

    view! {
        <article class="glass-card rounded-xl p-6 flex flex-col hover:scale-[1.02] hover:shadow-lg hover:shadow-portfolio-accent1/20 transition-all duration-300">
            <h3 class="text-xl font-semibold">{title}</h3>
            <p class="mt-3 text-white/70 leading-relaxed flex-grow">{project.description.clone()}</p>
            <div class="mt-4 flex flex-wrap gap-2">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="rounded-full px-3 py-1 text-xs bg-portfolio-accent1/15 text-portfolio-accent1">
                                {tag.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
