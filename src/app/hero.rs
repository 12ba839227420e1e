use leptos::prelude::*;

use crate::content::Profile;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center px-4 pt-24">
            <div class="max-w-4xl mx-auto text-center animate-fade-in-up">
                <Monogram initials=profile.initials() />
                <p class="mt-8 text-portfolio-accent1 font-medium tracking-wide">"Hello, I'm"</p>
                <h1 class="mt-2 text-4xl md:text-6xl font-bold">{profile.name.clone()}</h1>
                <h2 class="mt-4 text-xl md:text-2xl gradient-text font-semibold">
                    {profile.headline.clone()}
                </h2>
                <p class="mt-6 text-white/70 max-w-2xl mx-auto leading-relaxed">
                    {profile.tagline.clone()}
                </p>
                <p class="mt-2 text-sm text-white/50">"📍 " {profile.location.clone()}</p>
                <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-full bg-gradient-to-r from-portfolio-accent1 to-portfolio-accent2 font-medium hover:scale-105 transition-all duration-300 shadow-lg hover:shadow-portfolio-accent1/30"
                    >
                        "View my work"
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-full border border-white/20 hover:border-portfolio-accent1/60 hover:bg-white/5 transition-all duration-300"
                    >
                        "Get in touch"
                    </a>
                    {profile
                        .resume_url
                        .as_ref()
                        .map(|url| {
                            view! {
                                <a
                                    href=url.clone()
                                    download=""
                                    class="px-6 py-3 rounded-full border border-white/20 hover:bg-white/5 transition-all duration-300"
                                >
                                    "Resume"
                                </a>
                            }
                        })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Monogram(initials: String) -> impl IntoView {
    view! {
        <div class="mx-auto w-32 h-32 md:w-40 md:h-40 rounded-full p-1 bg-gradient-to-br from-portfolio-accent1 to-portfolio-accent2 shadow-2xl">
            <div class="w-full h-full rounded-full bg-portfolio-bg flex items-center justify-center">
                <span class="text-4xl md:text-5xl font-bold gradient-text">{initials}</span>
            </div>
        </div>
    }
}
