use super::CarouselError;

/// Read-only view of an engine's scroll position.
///
/// Listeners receive this instead of the engine itself so they can query
/// state while the engine is still dispatching.
pub trait SnapQuery {
    fn snap_count(&self) -> usize;
    fn selected_scroll_snap(&self) -> usize;
    fn can_scroll_prev(&self) -> bool;
    fn can_scroll_next(&self) -> bool;
}

pub type Listener = Box<dyn FnMut(&dyn SnapQuery) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// The selected snap changed.
    Select,
    /// The engine was re-initialized with new options.
    ReInit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub looping: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { looping: true }
    }
}

/// Slide positioning capability driven by the carousel controller.
pub trait CarouselEngine: SnapQuery {
    fn scroll_prev(&mut self);
    fn scroll_next(&mut self);
    fn scroll_to(&mut self, index: usize);
    fn re_init(&mut self, options: EngineOptions);
    fn on(&mut self, event: EngineEvent, listener: Listener) -> ListenerId;
    fn off(&mut self, id: ListenerId) -> bool;
}

struct Subscription {
    id: ListenerId,
    event: EngineEvent,
    listener: Listener,
}

/// Index-tracking engine with one snap per slide.
///
/// Physical positioning is left to the renderer, which translates the track
/// by the selected snap.
pub struct SnapEngine {
    len: usize,
    selected: usize,
    options: EngineOptions,
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl std::fmt::Debug for SnapEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapEngine")
            .field("len", &self.len)
            .field("selected", &self.selected)
            .field("options", &self.options)
            .field("listeners", &self.subscriptions.len())
            .finish()
    }
}

impl SnapEngine {
    pub fn new(len: usize, options: EngineOptions) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::EmptyImageList);
        }
        Ok(Self {
            len,
            selected: 0,
            options,
            subscriptions: Vec::new(),
            next_id: 0,
        })
    }

    fn select(&mut self, index: usize) {
        if index == self.selected {
            return;
        }
        self.selected = index;
        log::debug!("carousel engine selected snap {index}");
        self.emit(EngineEvent::Select);
    }

    fn emit(&mut self, event: EngineEvent) {
        // listeners borrow the engine read-only while they run
        let mut subscriptions = std::mem::take(&mut self.subscriptions);
        for sub in subscriptions.iter_mut().filter(|s| s.event == event) {
            (sub.listener)(&*self);
        }
        self.subscriptions = subscriptions;
    }
}

impl SnapQuery for SnapEngine {
    fn snap_count(&self) -> usize {
        self.len
    }

    fn selected_scroll_snap(&self) -> usize {
        self.selected
    }

    fn can_scroll_prev(&self) -> bool {
        if self.len < 2 {
            false
        } else {
            self.options.looping || self.selected > 0
        }
    }

    fn can_scroll_next(&self) -> bool {
        if self.len < 2 {
            false
        } else {
            self.options.looping || self.selected + 1 < self.len
        }
    }
}

impl CarouselEngine for SnapEngine {
    fn scroll_prev(&mut self) {
        if !self.can_scroll_prev() {
            return;
        }
        let index = if self.selected == 0 {
            self.len - 1
        } else {
            self.selected - 1
        };
        self.select(index);
    }

    fn scroll_next(&mut self) {
        if !self.can_scroll_next() {
            return;
        }
        self.select((self.selected + 1) % self.len);
    }

    fn scroll_to(&mut self, index: usize) {
        self.select(index.min(self.len - 1));
    }

    fn re_init(&mut self, options: EngineOptions) {
        self.options = options;
        self.selected = self.selected.min(self.len - 1);
        self.emit(EngineEvent::ReInit);
    }

    fn on(&mut self, event: EngineEvent, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            event,
            listener,
        });
        id
    }

    fn off(&mut self, id: ListenerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(engine: &mut SnapEngine, event: EngineEvent) -> (ListenerId, Arc<Mutex<Vec<usize>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = engine.on(
            event,
            Box::new(move |q: &dyn SnapQuery| {
                sink.lock()
                    .expect("should be able to lock recorder")
                    .push(q.selected_scroll_snap())
            }),
        );
        (id, seen)
    }

    #[test]
    fn test_empty_engine_is_rejected() {
        assert!(matches!(
            SnapEngine::new(0, EngineOptions::default()),
            Err(CarouselError::EmptyImageList)
        ));
    }

    #[test]
    fn test_looping_wraps_both_directions() {
        let mut engine = SnapEngine::new(3, EngineOptions::default()).unwrap();
        assert!(engine.can_scroll_prev());
        assert!(engine.can_scroll_next());

        engine.scroll_prev();
        assert_eq!(engine.selected_scroll_snap(), 2);
        engine.scroll_next();
        assert_eq!(engine.selected_scroll_snap(), 0);
        engine.scroll_next();
        engine.scroll_next();
        assert_eq!(engine.selected_scroll_snap(), 2);
        engine.scroll_next();
        assert_eq!(engine.selected_scroll_snap(), 0);
    }

    #[test]
    fn test_bounded_engine_stops_at_edges() {
        let mut engine = SnapEngine::new(3, EngineOptions { looping: false }).unwrap();
        assert!(!engine.can_scroll_prev());
        assert!(engine.can_scroll_next());

        engine.scroll_prev();
        assert_eq!(engine.selected_scroll_snap(), 0);

        engine.scroll_to(2);
        assert!(engine.can_scroll_prev());
        assert!(!engine.can_scroll_next());
        engine.scroll_next();
        assert_eq!(engine.selected_scroll_snap(), 2);
    }

    #[test]
    fn test_single_slide_never_scrolls() {
        let mut engine = SnapEngine::new(1, EngineOptions::default()).unwrap();
        assert!(!engine.can_scroll_prev());
        assert!(!engine.can_scroll_next());
        engine.scroll_next();
        engine.scroll_prev();
        assert_eq!(engine.selected_scroll_snap(), 0);
    }

    #[test]
    fn test_scroll_to_clamps() {
        let mut engine = SnapEngine::new(5, EngineOptions::default()).unwrap();
        engine.scroll_to(99);
        assert_eq!(engine.selected_scroll_snap(), 4);
    }

    #[test]
    fn test_select_fires_only_on_change() {
        let mut engine = SnapEngine::new(4, EngineOptions::default()).unwrap();
        let (_, seen) = recorder(&mut engine, EngineEvent::Select);

        engine.scroll_next();
        engine.scroll_to(1);
        engine.scroll_to(3);
        engine.scroll_next();

        assert_eq!(*seen.lock().unwrap(), vec![1, 3, 0]);
    }

    #[test]
    fn test_reinit_notifies_reinit_listeners_only() {
        let mut engine = SnapEngine::new(4, EngineOptions::default()).unwrap();
        let (_, selects) = recorder(&mut engine, EngineEvent::Select);
        let (_, reinits) = recorder(&mut engine, EngineEvent::ReInit);

        engine.scroll_to(2);
        engine.re_init(EngineOptions { looping: false });

        assert_eq!(*selects.lock().unwrap(), vec![2]);
        assert_eq!(*reinits.lock().unwrap(), vec![2]);

        // bounded now: the last snap no longer wraps forward
        engine.scroll_to(3);
        assert!(!engine.can_scroll_next());
    }

    #[test]
    fn test_off_removes_listener() {
        let mut engine = SnapEngine::new(4, EngineOptions::default()).unwrap();
        let (id, seen) = recorder(&mut engine, EngineEvent::Select);

        engine.scroll_next();
        assert!(engine.off(id));
        assert!(!engine.off(id));
        engine.scroll_next();

        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }
}
