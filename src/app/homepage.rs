use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};

use crate::content::{portfolio, Seo};

use super::{
    about::About, certifications::Certifications, contact::Contact, experience::Experience,
    footer::Footer, header::Header, hero::Hero, projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = match portfolio() {
        Ok(p) => p,
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            return Either::Right(view! {
                <Title text="Portfolio" />
                <main class="flex min-h-screen items-center justify-center">
                    <p class="text-muted">"Content is unavailable right now."</p>
                </main>
            });
        }
    };

    Either::Left(view! {
        <PageMeta seo=&portfolio.seo />
        <div class="min-h-screen bg-portfolio-bg text-white overflow-x-hidden">
            <Header name=&portfolio.profile.name />
            <main id="content">
                <Hero profile=&portfolio.profile />
                <About about=&portfolio.about />
                <Projects projects=portfolio.projects.as_slice() />
                <Skills skills=portfolio.skills.as_slice() />
                <Experience roles=portfolio.experience.as_slice() />
                {portfolio.certification_images().map(|images| view! { <Certifications images /> })}
                <Contact contact=&portfolio.contact />
            </main>
            <Footer name=&portfolio.profile.name />
        </div>
    })
}

/// Document title plus description / keywords meta tags.
#[component]
fn PageMeta(seo: &'static Seo) -> impl IntoView {
    view! {
        <Title text=seo.title.clone() />
        <Meta name="description" content=seo.description.clone() />
        <Meta name="keywords" content=seo.keywords_content() />
    }
}
