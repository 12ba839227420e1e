use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Latches to `true` the first time `target` scrolls into view.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let revealed = RwSignal::new(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            revealed.set(true);
        }
    });
    revealed.read_only().into()
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-20"
    }
}

/// Page section with an anchor id, a heading and a fade-in on first view.
#[component]
pub fn RevealSection(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section id=id node_ref=section_ref class="py-20 px-4">
            <div class=move || {
                format!(
                    "max-w-6xl mx-auto transition-all duration-1000 {}",
                    reveal_class(revealed.get()),
                )
            }>
                {section_heading(title, subtitle)}
                {children()}
            </div>
        </section>
    }
}

pub fn section_heading(title: &'static str, subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold gradient-text">{title}</h2>
            <div class="mx-auto mt-3 h-1 w-20 rounded-full bg-gradient-to-r from-portfolio-accent1 to-portfolio-accent2"></div>
            {subtitle.map(|s| view! { <p class="mt-4 text-white/60 max-w-2xl mx-auto">{s}</p> })}
        </div>
    }
}
