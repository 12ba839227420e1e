use leptos::prelude::*;

use crate::content::About as AboutContent;

use super::reveal::RevealSection;

#[component]
pub fn About(about: &'static AboutContent) -> impl IntoView {
    view! {
        <RevealSection id="about" title="About Me">
            <div class="grid gap-10 md:grid-cols-5 items-start">
                <div class="md:col-span-3 space-y-4">
                    {about
                        .paragraphs
                        .iter()
                        .map(|p| view! { <p class="text-white/80 leading-relaxed">{p.clone()}</p> })
                        .collect_view()}
                </div>
                <div class="md:col-span-2 grid grid-cols-2 gap-4">
                    {about
                        .highlights
                        .iter()
                        .map(|h| {
                            view! {
                                <div class="glass-card rounded-lg p-4 text-center hover:border-portfolio-accent1/50 transition-all duration-300">
                                    <div class="text-lg font-bold gradient-text">{h.value.clone()}</div>
                                    <div class="mt-1 text-sm text-white/60">{h.label.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
