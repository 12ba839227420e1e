use leptos::prelude::*;

use crate::content::SkillGroup;

use super::reveal::RevealSection;

#[component]
pub fn Skills(skills: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <RevealSection id="skills" title="Skills">
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                {skills
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="glass-card rounded-xl p-5">
                                <h3 class="font-semibold text-portfolio-accent2 mb-3">
                                    {group.category.clone()}
                                </h3>
                                <ul class="flex flex-wrap gap-2">
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <li class="rounded-md px-2 py-1 text-sm bg-white/10 hover:bg-white/20 transition-colors duration-200">
                                                    {item.clone()}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}
