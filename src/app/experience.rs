use leptos::prelude::*;

use crate::content::Role;

use super::reveal::RevealSection;

#[component]
pub fn Experience(roles: &'static [Role]) -> impl IntoView {
    view! {
        <RevealSection id="experience" title="Experience">
            <ol class="relative border-l border-white/15 ml-3 space-y-10">
                {roles
                    .iter()
                    .map(|role| {
                        view! {
                            <li class="ml-6">
                                <span class="absolute -left-2 mt-1.5 h-4 w-4 rounded-full bg-gradient-to-r from-portfolio-accent1 to-portfolio-accent2"></span>
                                <div class="flex flex-col sm:flex-row sm:items-baseline sm:justify-between gap-1">
                                    <h3 class="text-lg font-semibold">{role.title.clone()}</h3>
                                    <span class="text-sm text-white/50">{role.period.clone()}</span>
                                </div>
                                <div class="text-portfolio-accent1 text-sm">{role.organization.clone()}</div>
                                <ul class="mt-3 list-disc list-inside space-y-1 text-white/70">
                                    {role
                                        .points
                                        .iter()
                                        .map(|point| view! { <li>{point.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </RevealSection>
    }
}
