use std::time::Duration;

use super::CarouselError;

/// Repeating timer owned by [`Autoplay`].
///
/// `start` registers a timer that calls back every `period`; `cancel` must
/// deregister it synchronously so no further ticks fire.
pub trait Ticker {
    type Handle;

    fn start(&mut self, period: Duration) -> Result<Self::Handle, CarouselError>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Autoplay timer that runs while enabled and not hovered.
///
/// At most one timer is registered at any time. Every state change that
/// flips the outcome cancels the pending timer before a new one starts.
pub struct Autoplay<T: Ticker> {
    ticker: T,
    period: Duration,
    enabled: bool,
    hovered: bool,
    active: Option<T::Handle>,
}

impl<T: Ticker> Autoplay<T> {
    pub fn new(ticker: T, period: Duration) -> Self {
        Self {
            ticker,
            period,
            enabled: false,
            hovered: false,
            active: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn enable(&mut self) -> Result<(), CarouselError> {
        self.enabled = true;
        self.reconcile()
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.stop();
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.stop();
    }

    pub fn hover_leave(&mut self) -> Result<(), CarouselError> {
        self.hovered = false;
        self.reconcile()
    }

    fn should_run(&self) -> bool {
        self.enabled && !self.hovered
    }

    fn reconcile(&mut self) -> Result<(), CarouselError> {
        if self.should_run() == self.is_running() {
            return Ok(());
        }
        self.stop();
        if self.should_run() {
            let handle = self.ticker.start(self.period)?;
            log::debug!("autoplay started ({}ms)", self.period.as_millis());
            self.active = Some(handle);
        }
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            self.ticker.cancel(handle);
            log::debug!("autoplay stopped");
        }
    }
}

impl<T: Ticker> Drop for Autoplay<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
