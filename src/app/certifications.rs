use std::{sync::Arc, time::Duration};

use leptos::{html, prelude::*};

use crate::carousel::{
    dot_count, dot_target, track_slides, Autoplay, CarouselController, CarouselError,
    CarouselView, EngineOptions, ImageList, Lightbox, SnapEngine, Ticker,
};

use super::{
    icons::{ChevronLeft, ChevronRight, ZoomIcon},
    lightbox::LightboxOverlay,
    reveal::{reveal_class, section_heading, use_reveal},
};

const AUTOPLAY_PERIOD: Duration = Duration::from_millis(3000);

/// Browser interval backing the carousel autoplay.
struct IntervalTicker {
    on_tick: Arc<dyn Fn() + Send + Sync>,
}

impl IntervalTicker {
    fn new(on_tick: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_tick: Arc::new(on_tick),
        }
    }
}

impl Ticker for IntervalTicker {
    type Handle = IntervalHandle;

    fn start(&mut self, period: Duration) -> Result<IntervalHandle, CarouselError> {
        let on_tick = self.on_tick.clone();
        set_interval_with_handle(move || on_tick(), period)
            .map_err(|e| CarouselError::Timer(format!("{e:?}")))
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        handle.clear();
    }
}

#[component]
pub fn Certifications(images: ImageList) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section id="certifications" node_ref=section_ref class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                {section_heading("Certifications", Some("Click a certificate to view it full size"))}
                <CertificationsCarousel images is_visible=revealed />
            </div>
        </section>
    }
}

#[component]
pub fn CertificationsCarousel(
    images: ImageList,
    #[prop(into)] is_visible: Signal<bool>,
) -> impl IntoView {
    let len = images.len();
    let (carousel, set_carousel) = signal(CarouselView::default());
    let (autoplaying, set_autoplaying) = signal(false);
    let controller = StoredValue::new(CarouselController::<SnapEngine>::new());
    let autoplay = StoredValue::new(None::<Autoplay<IntervalTicker>>);
    let lightbox = RwSignal::new(Lightbox::new(len));

    // The engine only exists once mounted in the browser; until then every
    // controller call is a no-op.
    Effect::new(move |_| {
        if controller.with_value(|c| c.is_ready()) {
            return;
        }
        let engine = match SnapEngine::new(len, EngineOptions::default()) {
            Ok(engine) => engine,
            Err(e) => {
                log::warn!("certifications carousel disabled: {e}");
                return;
            }
        };
        controller.update_value(|c| {
            c.attach(engine, Arc::new(move |v: CarouselView| set_carousel.set(v)))
        });

        let ticker = IntervalTicker::new(move || controller.update_value(|c| c.advance()));
        let mut player = Autoplay::new(ticker, AUTOPLAY_PERIOD);
        if let Err(e) = player.enable() {
            log::warn!("{e}");
        }
        set_autoplaying.set(player.is_running());
        autoplay.set_value(Some(player));
    });

    on_cleanup(move || {
        autoplay.try_update_value(|a| {
            if let Some(a) = a.as_mut() {
                a.disable();
            }
        });
        controller.try_update_value(|c| {
            c.detach();
        });
    });

    let set_hovered = move |hovered: bool| {
        autoplay.update_value(|a| {
            let Some(a) = a.as_mut() else {
                return;
            };
            if hovered {
                a.hover_enter();
            } else if let Err(e) = a.hover_leave() {
                log::warn!("{e}");
            }
            set_autoplaying.set(a.is_running());
        });
    };

    let toggle = move |index: usize| {
        lightbox.update(|l| {
            if let Err(e) = l.toggle(index) {
                log::warn!("{e}");
            }
        });
    };

    // Leading images repeat after the last slide so looping snaps near the
    // end still fill the frame. Repeats open the lightbox on the original.
    let slides = track_slides(len)
        .into_iter()
        .enumerate()
        .filter_map(|(position, index)| images.get(index).map(|src| (position, index, src.to_string())))
        .map(|(position, index, src)| {
            view! {
                <div class="cert-slide min-w-0 pl-4" aria-hidden=(position >= len).then_some("true")>
                    <div
                        class=move || {
                            format!(
                                "relative group cursor-pointer enlarge-container transform transition-all duration-500 {}",
                                if is_visible.get() { "animate-fade-in-up" } else { "opacity-0" },
                            )
                        }
                        style=format!("animation-delay: {:.1}s", index as f64 * 0.1)
                        on:click=move |_| toggle(index)
                    >
                        <div class="w-full h-full aspect-[3/4] overflow-hidden bg-white/5 rounded-lg glass-card p-2 transition-all duration-500 hover:shadow-lg hover:shadow-portfolio-accent1/30 hover:border-portfolio-accent1/50 hover:scale-105">
                            <img
                                src=src
                                alt=format!("Certification {}", index + 1)
                                class="w-full h-full object-contain rounded transition-all duration-500 group-hover:scale-110 filter group-hover:brightness-110"
                                loading="lazy"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-portfolio-accent1/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 rounded-lg"></div>
                            <div class="absolute top-2 right-2 bg-white/10 backdrop-blur-sm rounded-full p-1 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                                <ZoomIcon />
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..dot_count(len))
        .map(|dot| {
            view! {
                <button
                    aria-label=format!("Go to slide {}", dot_target(dot) + 1)
                    on:click=move |_| controller.update_value(|c| c.scroll_to(dot_target(dot)))
                    class=move || {
                        if carousel.get().active_dot() == dot {
                            "h-2 w-6 rounded-full bg-portfolio-accent1 transition-all duration-300"
                        } else {
                            "h-2 w-2 rounded-full bg-white/20 hover:bg-white/40 transition-all duration-300"
                        }
                    }
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class=move || {
            format!("w-full mt-10 transition-all duration-1000 {}", reveal_class(is_visible.get()))
        }>
            <div class="relative">
                <button
                    on:click=move |_| controller.update_value(|c| c.scroll_prev())
                    disabled=move || !carousel.get().can_scroll_prev
                    class="absolute left-0 top-1/2 -translate-y-1/2 z-10 bg-gradient-to-r from-portfolio-accent1 to-portfolio-accent2 backdrop-blur-sm rounded-full p-3 text-white hover:scale-110 transition-all duration-300 -ml-4 shadow-lg hover:shadow-portfolio-accent1/30 disabled:opacity-40"
                    aria-label="Previous slide"
                >
                    <ChevronLeft />
                </button>
                <button
                    on:click=move |_| controller.update_value(|c| c.scroll_next())
                    disabled=move || !carousel.get().can_scroll_next
                    class="absolute right-0 top-1/2 -translate-y-1/2 z-10 bg-gradient-to-r from-portfolio-accent1 to-portfolio-accent2 backdrop-blur-sm rounded-full p-3 text-white hover:scale-110 transition-all duration-300 -mr-4 shadow-lg hover:shadow-portfolio-accent1/30 disabled:opacity-40"
                    aria-label="Next slide"
                >
                    <ChevronRight />
                </button>

                <div
                    class="overflow-hidden"
                    aria-roledescription="carousel"
                    aria-live=move || if autoplaying.get() { "off" } else { "polite" }
                    on:mouseenter=move |_| set_hovered(true)
                    on:mouseleave=move |_| set_hovered(false)
                >
                    <div
                        class="cert-track flex transition-transform duration-500 ease-out"
                        style:transform=move || {
                            format!(
                                "translateX(calc(var(--slide-basis) * -{}))",
                                carousel.get().selected,
                            )
                        }
                    >
                        {slides}
                    </div>
                </div>

                <div class="flex justify-center mt-6 space-x-2">{dots}</div>
            </div>

            <Show when=move || lightbox.with(Lightbox::is_open)>
                <LightboxOverlay images=images.clone() lightbox />
            </Show>
        </div>
    }
}
