use leptos::{
    ev::{keydown, pointerdown},
    html,
    prelude::*,
    web_sys::Node,
};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::carousel::{ImageList, Lightbox, PointerTarget};

use super::icons::{ChevronLeft, ChevronRight, CloseIcon};

/// Full-screen viewer for the image selected in `lightbox`.
///
/// Mount this only while the lightbox is open: the document-level
/// pointer-down and keyboard listeners are registered on mount and
/// released when the overlay is torn down.
#[component]
pub fn LightboxOverlay(images: ImageList, lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();

    let stop_outside = use_event_listener(use_document(), pointerdown, move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = match (content_ref.get_untracked(), target) {
            (Some(content), Some(target)) => content.contains(Some(&target)),
            _ => false,
        };
        lightbox.update(|l| l.pointer_down(PointerTarget::from_containment(inside)));
    });
    let stop_keys = use_event_listener(use_document(), keydown, move |ev| {
        let key = ev.key();
        lightbox.update(|l| {
            l.handle_key(&key);
        });
    });
    on_cleanup(move || {
        stop_outside();
        stop_keys();
    });

    let current = Memo::new(move |_| {
        lightbox.with(|l| {
            l.index()
                .and_then(|i| images.get(i).map(|src| (i, src.to_string())))
        })
    });

    view! {
        <div
            class="fixed inset-0 bg-black/90 flex items-center justify-center z-50 backdrop-blur-md animate-fade-in-up"
            role="dialog"
            aria-modal="true"
        >
            <div
                node_ref=content_ref
                class="enlarge-container relative max-w-4xl max-h-[95vh] w-[95%] p-6 animate-scale-in"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="relative bg-white/5 rounded-xl p-4 backdrop-blur-sm border border-white/10">
                    {move || {
                        current
                            .get()
                            .map(|(i, src)| {
                                view! {
                                    <img
                                        src=src
                                        alt=format!("Enlarged certification {}", i + 1)
                                        class="w-full h-full max-h-[80vh] object-contain rounded-lg shadow-2xl"
                                    />
                                }
                            })
                    }}
                    <button
                        on:click=move |_| lightbox.update(Lightbox::close)
                        class="absolute -top-2 -right-2 bg-gradient-to-r from-portfolio-accent1 to-portfolio-accent2 backdrop-blur-sm rounded-full p-2 text-white hover:scale-110 transition-all duration-300 shadow-lg hover:shadow-portfolio-accent1/30"
                        aria-label="Close enlarged view"
                    >
                        <CloseIcon />
                    </button>
                    <button
                        on:click=move |_| lightbox.update(Lightbox::prev)
                        class="absolute left-4 top-1/2 -translate-y-1/2 bg-white/10 backdrop-blur-sm rounded-full p-2 text-white hover:bg-white/20 transition-all duration-300"
                        aria-label="Previous image"
                    >
                        <ChevronLeft />
                    </button>
                    <button
                        on:click=move |_| lightbox.update(Lightbox::next)
                        class="absolute right-4 top-1/2 -translate-y-1/2 bg-white/10 backdrop-blur-sm rounded-full p-2 text-white hover:bg-white/20 transition-all duration-300"
                        aria-label="Next image"
                    >
                        <ChevronRight />
                    </button>
                    <div class="absolute bottom-4 left-1/2 -translate-x-1/2 bg-white/10 backdrop-blur-sm rounded-full px-3 py-1 text-white text-sm">
                        {move || lightbox.with(Lightbox::position_label)}
                    </div>
                </div>
            </div>
        </div>
    }
}
