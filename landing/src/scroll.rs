//! Viewport scroll subscription.
//!
//! The shell needs exactly one passive scroll listener for its lifetime.
//! [`ScrollSubscription`] owns the registration and removes it once, either
//! explicitly through [`ScrollSubscription::release`] or on drop.

use leptos::ev;
use leptos::prelude::*;
use tracing::debug;

/// Something that can deliver vertical scroll offsets.
pub trait ScrollSource {
    /// Token identifying one registration.
    type Handle;

    fn subscribe(&self, on_scroll: impl Fn(f64) + 'static) -> Self::Handle;

    fn unsubscribe(&self, handle: Self::Handle);

    /// Current vertical offset, used to sync state right after subscribing.
    fn offset(&self) -> f64;
}

/// A live scroll registration; removed exactly once.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn new(source: S, on_scroll: impl Fn(f64) + 'static) -> Self {
        let handle = source.subscribe(on_scroll);
        debug!("scroll listener registered");
        Self {
            source,
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn offset(&self) -> f64 {
        self.source.offset()
    }

    /// Remove the listener. Later calls (and the drop) do nothing.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
            debug!("scroll listener removed");
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Scroll events of the browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    type Handle = WindowListenerHandle;

    fn subscribe(&self, on_scroll: impl Fn(f64) + 'static) -> WindowListenerHandle {
        window_event_listener(ev::scroll, move |_| on_scroll(window_offset()))
    }

    fn unsubscribe(&self, handle: WindowListenerHandle) {
        handle.remove();
    }

    fn offset(&self) -> f64 {
        window_offset()
    }
}

fn window_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
