use std::sync::Arc;

use super::{
    engine::{CarouselEngine, EngineEvent, ListenerId, SnapQuery},
    DOT_GROUP_SIZE,
};

/// UI state derived from the engine after every select / reInit event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselView {
    pub selected: usize,
    pub can_scroll_prev: bool,
    pub can_scroll_next: bool,
}

impl CarouselView {
    pub fn from_engine(engine: &dyn SnapQuery) -> Self {
        Self {
            selected: engine.selected_scroll_snap(),
            can_scroll_prev: engine.can_scroll_prev(),
            can_scroll_next: engine.can_scroll_next(),
        }
    }

    pub fn active_dot(&self) -> usize {
        active_dot(self.selected)
    }
}

/// Number of progress dots for `len` images.
pub fn dot_count(len: usize) -> usize {
    len.div_ceil(DOT_GROUP_SIZE)
}

/// Dot that contains the slide at `index`.
pub fn active_dot(index: usize) -> usize {
    index / DOT_GROUP_SIZE
}

/// First slide of the group represented by `dot`.
pub fn dot_target(dot: usize) -> usize {
    dot * DOT_GROUP_SIZE
}

/// Upper bound on slides visible in one frame (narrowest slide basis is 25%).
pub const MAX_VISIBLE_SLIDES: usize = 4;

/// Image index of every slide rendered in the track, in track order.
///
/// With more than one image the first [`MAX_VISIBLE_SLIDES`] images repeat
/// after the last, so translating the track to any snap `s` shows a full
/// frame `s, s + 1, ..` wrapping back to the start.
pub fn track_slides(len: usize) -> Vec<usize> {
    if len < 2 {
        return (0..len).collect();
    }
    (0..len + MAX_VISIBLE_SLIDES).map(|i| i % len).collect()
}

/// Delegates navigation to an engine once one is attached.
///
/// Until [`CarouselController::attach`] is called every operation is a
/// silent no-op, since the engine only exists after the first render.
pub struct CarouselController<E: CarouselEngine> {
    engine: Option<E>,
    subscriptions: Vec<ListenerId>,
}

impl<E: CarouselEngine> Default for CarouselController<E> {
    fn default() -> Self {
        Self {
            engine: None,
            subscriptions: Vec::new(),
        }
    }
}

impl<E: CarouselEngine> CarouselController<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    /// Takes ownership of `engine` and publishes a fresh [`CarouselView`]
    /// through `notify` now and after every select or reInit event.
    pub fn attach(&mut self, engine: E, notify: Arc<dyn Fn(CarouselView) + Send + Sync>) {
        self.detach();
        let mut engine = engine;
        for event in [EngineEvent::Select, EngineEvent::ReInit] {
            let notify = notify.clone();
            let id = engine.on(
                event,
                Box::new(move |q: &dyn SnapQuery| notify(CarouselView::from_engine(q))),
            );
            self.subscriptions.push(id);
        }
        notify(CarouselView::from_engine(&engine));
        self.engine = Some(engine);
    }

    /// Unsubscribes from the engine and hands it back.
    pub fn detach(&mut self) -> Option<E> {
        let mut engine = self.engine.take()?;
        for id in self.subscriptions.drain(..) {
            engine.off(id);
        }
        Some(engine)
    }

    pub fn scroll_prev(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.scroll_prev();
        }
    }

    pub fn scroll_next(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.scroll_next();
        }
    }

    pub fn scroll_to(&mut self, index: usize) {
        if let Some(engine) = self.engine.as_mut() {
            engine.scroll_to(index);
        }
    }

    /// One autoplay step: forward if possible, otherwise back to the start.
    pub fn advance(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            if engine.can_scroll_next() {
                engine.scroll_next();
            } else {
                engine.scroll_to(0);
            }
        }
    }
}
