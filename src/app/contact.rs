use leptos::prelude::*;
use leptos_use::{use_clipboard, UseClipboardReturn};

use crate::content::Contact as ContactContent;

use super::reveal::RevealSection;

#[component]
pub fn Contact(contact: &'static ContactContent) -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();
    let email = contact.email.as_str();

    view! {
        <RevealSection id="contact" title="Get In Touch">
            <div class="max-w-2xl mx-auto text-center glass-card rounded-xl p-8">
                <p class="text-lg text-white/80 mb-6">{contact.blurb.clone()}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href=format!("mailto:{email}")
                        class="px-6 py-3 rounded-full bg-gradient-to-r from-portfolio-accent1 to-portfolio-accent2 font-medium hover:scale-105 transition-all duration-300"
                    >
                        "📧 " {email}
                    </a>
                    <Show when=move || is_supported.get()>
                        <button
                            class="px-4 py-3 rounded-full border border-white/20 hover:bg-white/10 transition-all duration-300 text-sm"
                            on:click={
                                let copy = copy.clone();
                                move |_| copy(email)
                            }
                        >
                            {move || if copied.get() { "✓ Copied" } else { "Copy email" }}
                        </button>
                    </Show>
                </div>
                <div class="mt-8 flex justify-center gap-5">
                    {contact
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-white/70 hover:text-white text-3xl transition-colors duration-200"
                                    aria-label=link.label.clone()
                                >
                                    <i class=link.icon.clone()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
