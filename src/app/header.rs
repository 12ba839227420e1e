use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::icons::MenuIcon;

/// Vertical scroll offset after which the header gets a solid background.
const SCROLL_THRESHOLD: f64 = 50.0;

const NAV_ITEMS: [(&str, &str); 6] = [
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Certifications", "#certifications"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header(name: &'static str) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    let nav_links = move |link_class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|(label, href)| {
                view! {
                    <a href=*href class=link_class on:click=move |_| set_menu_open(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if scroll_y.get() > SCROLL_THRESHOLD {
                "fixed inset-x-0 top-0 z-40 py-3 bg-portfolio-bg/90 backdrop-blur-md shadow-lg transition-all duration-300"
            } else {
                "fixed inset-x-0 top-0 z-40 py-5 bg-transparent transition-all duration-300"
            }
        }>
            <div class="max-w-6xl mx-auto px-4 flex items-center justify-between">
                <a href="#content" class="text-xl font-bold gradient-text">
                    {name}
                </a>
                <nav class="hidden md:flex items-center gap-6" aria-label="Sections">
                    {nav_links("text-white/70 hover:text-white transition-colors duration-200")}
                </nav>
                <button
                    class="md:hidden text-white/80 hover:text-white"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <MenuIcon open=menu_open.into() />
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav
                    class="md:hidden mt-3 mx-4 flex flex-col gap-3 rounded-lg glass-card p-4"
                    aria-label="Sections"
                >
                    {nav_links("text-white/80 hover:text-white")}
                </nav>
            </Show>
        </header>
    }
}
