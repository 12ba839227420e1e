mod autoplay;
mod controller;
mod engine;
mod lightbox;

pub use autoplay::{Autoplay, Ticker};
pub use controller::{
    active_dot, dot_count, dot_target, track_slides, CarouselController, CarouselView,
    MAX_VISIBLE_SLIDES,
};
pub use engine::{CarouselEngine, EngineEvent, EngineOptions, Listener, ListenerId, SnapEngine, SnapQuery};
pub use lightbox::{Lightbox, LightboxState, PointerTarget};

use std::sync::Arc;

use thiserror::Error;

/// Number of slides represented by a single progress dot.
pub const DOT_GROUP_SIZE: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one image")]
    EmptyImageList,
    #[error("index {index} is out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("couldn't start autoplay timer: {0}")]
    Timer(String),
}

/// Ordered, read-only list of image URLs shown by the carousel.
///
/// Cloning is cheap; every clone shares the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    images: Arc<[String]>,
}

impl ImageList {
    pub fn new(images: Vec<String>) -> Result<Self, CarouselError> {
        if images.is_empty() {
            return Err(CarouselError::EmptyImageList);
        }
        Ok(Self {
            images: images.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }
}
