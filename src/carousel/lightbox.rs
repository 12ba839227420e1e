use super::CarouselError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

/// Where a pointer-down landed relative to the lightbox content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Content,
    Outside,
}

impl PointerTarget {
    /// Classifies a pointer-down by whether the content region contains it.
    pub fn from_containment(inside_content: bool) -> Self {
        if inside_content {
            Self::Content
        } else {
            Self::Outside
        }
    }
}

/// Enlarged-image viewer state.
///
/// Navigation here is independent of the carousel engine: it indexes the
/// same image list but never moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    state: LightboxState,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Closed => None,
            LightboxState::Open(i) => Some(i),
        }
    }

    pub fn is_open(&self) -> bool {
        self.index().is_some()
    }

    pub fn open(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.state = LightboxState::Open(index);
        Ok(())
    }

    /// Slide click: opens `index`, or closes if it is already showing.
    pub fn toggle(&mut self, index: usize) -> Result<LightboxState, CarouselError> {
        if self.index() == Some(index) {
            self.close();
        } else {
            self.open(index)?;
        }
        Ok(self.state)
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.index() {
            self.state = LightboxState::Open((i + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.index() {
            let i = if i == 0 { self.len - 1 } else { i - 1 };
            self.state = LightboxState::Open(i);
        }
    }

    pub fn pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.close();
        }
    }

    /// Keyboard shortcuts while open: Escape closes, the left and right
    /// arrows step through the images. Returns whether `key` was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        true
    }

    /// 1-based "current / total" label, e.g. `"3 / 13"`.
    pub fn position_label(&self) -> Option<String> {
        self.index().map(|i| format!("{} / {}", i + 1, self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let lightbox = Lightbox::new(13);
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert_eq!(lightbox.index(), None);
        assert_eq!(lightbox.position_label(), None);
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut lightbox = Lightbox::new(13);
        let original = lightbox;

        assert_eq!(lightbox.toggle(4), Ok(LightboxState::Open(4)));
        assert_eq!(lightbox.toggle(4), Ok(LightboxState::Closed));
        assert_eq!(lightbox, original);
    }

    #[test]
    fn test_toggle_other_slide_switches() {
        let mut lightbox = Lightbox::new(13);
        lightbox.toggle(2).unwrap();
        assert_eq!(lightbox.toggle(7), Ok(LightboxState::Open(7)));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut lightbox = Lightbox::new(13);
        assert_eq!(
            lightbox.toggle(13),
            Err(CarouselError::IndexOutOfRange { index: 13, len: 13 })
        );
        assert_eq!(lightbox.state(), LightboxState::Closed);

        lightbox.open(3).unwrap();
        assert!(lightbox.open(20).is_err());
        assert_eq!(lightbox.state(), LightboxState::Open(3));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut lightbox = Lightbox::new(13);
        lightbox.open(12).unwrap();
        lightbox.next();
        assert_eq!(lightbox.state(), LightboxState::Open(0));
        lightbox.prev();
        assert_eq!(lightbox.state(), LightboxState::Open(12));
        lightbox.prev();
        assert_eq!(lightbox.state(), LightboxState::Open(11));
    }

    #[test]
    fn test_navigation_stays_in_range() {
        for len in 1..8 {
            let mut lightbox = Lightbox::new(len);
            lightbox.open(0).unwrap();
            for _ in 0..(len * 3) {
                lightbox.next();
                assert!(lightbox.index().is_some_and(|i| i < len));
            }
            for _ in 0..(len * 3) {
                lightbox.prev();
                assert!(lightbox.index().is_some_and(|i| i < len));
            }
        }
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let mut lightbox = Lightbox::new(5);
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn test_pointer_down_outside_closes() {
        let mut lightbox = Lightbox::new(13);
        lightbox.open(6).unwrap();

        lightbox.pointer_down(PointerTarget::Content);
        assert_eq!(lightbox.state(), LightboxState::Open(6));

        lightbox.pointer_down(PointerTarget::Outside);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn test_pointer_target_from_containment() {
        assert_eq!(PointerTarget::from_containment(true), PointerTarget::Content);
        assert_eq!(PointerTarget::from_containment(false), PointerTarget::Outside);

        let mut lightbox = Lightbox::new(13);
        lightbox.open(2).unwrap();
        lightbox.pointer_down(PointerTarget::from_containment(true));
        assert!(lightbox.is_open());
        lightbox.pointer_down(PointerTarget::from_containment(false));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut lightbox = Lightbox::new(13);
        lightbox.open(5).unwrap();
        assert!(lightbox.handle_key("Escape"));
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let mut lightbox = Lightbox::new(13);
        lightbox.open(12).unwrap();
        assert!(lightbox.handle_key("ArrowRight"));
        assert_eq!(lightbox.state(), LightboxState::Open(0));

        assert!(lightbox.handle_key("ArrowLeft"));
        assert_eq!(lightbox.state(), LightboxState::Open(12));
    }

    #[test]
    fn test_unrelated_key_is_ignored() {
        let mut lightbox = Lightbox::new(13);
        lightbox.open(4).unwrap();
        for key in ["Enter", " ", "a", "ArrowUp", "Tab"] {
            assert!(!lightbox.handle_key(key));
            assert_eq!(lightbox.state(), LightboxState::Open(4));
        }
    }

    #[test]
    fn test_keys_while_closed_are_ignored() {
        let mut lightbox = Lightbox::new(13);
        for key in ["Escape", "ArrowLeft", "ArrowRight", "Enter"] {
            assert!(!lightbox.handle_key(key));
            assert_eq!(lightbox.state(), LightboxState::Closed);
        }
    }

    #[test]
    fn test_position_label_is_one_based() {
        let mut lightbox = Lightbox::new(13);
        lightbox.open(0).unwrap();
        assert_eq!(lightbox.position_label().as_deref(), Some("1 / 13"));
        lightbox.open(12).unwrap();
        assert_eq!(lightbox.position_label().as_deref(), Some("13 / 13"));
    }
}
