//! Deferred sections: content that is loaded after the first paint.
//!
//! Each deferred section owns a [`DeferredSlot`]. The slot starts
//! [`LoadPhase::Pending`] (placeholder), and a one-shot [`SectionLoader`]
//! settles it into either the content or an inline fallback. A slot settles
//! once; later results are dropped.

use std::future::Future;

use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::error::LoadError;

/// Shown in place of a section whose load failed.
pub const FALLBACK_MESSAGE: &str = "This section could not be loaded. Refresh the page to try again.";

#[derive(Clone, Debug, PartialEq)]
pub enum LoadPhase<T> {
    Pending,
    Ready(T),
    Failed(LoadError),
}

/// What the page should show for a slot right now. Exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotView {
    Placeholder,
    Content,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeferredSlot<T> {
    section: &'static str,
    phase: LoadPhase<T>,
}

impl<T> DeferredSlot<T> {
    pub fn pending(section: &'static str) -> Self {
        Self {
            section,
            phase: LoadPhase::Pending,
        }
    }

    pub fn section(&self) -> &'static str {
        self.section
    }

    pub fn phase(&self) -> &LoadPhase<T> {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, LoadPhase::Pending)
    }

    pub fn content(&self) -> Option<&T> {
        match &self.phase {
            LoadPhase::Ready(content) => Some(content),
            _ => None,
        }
    }

    pub fn view(&self) -> SlotView {
        match self.phase {
            LoadPhase::Pending => SlotView::Placeholder,
            LoadPhase::Ready(_) => SlotView::Content,
            LoadPhase::Failed(_) => SlotView::Fallback,
        }
    }

    /// Settle the slot with a load result.
    ///
    /// Returns `false` (and leaves the slot untouched) when it has already
    /// settled; there is exactly one placeholder-to-content transition.
    pub fn resolve(&mut self, result: Result<T, LoadError>) -> bool {
        if !self.is_pending() {
            warn!(section = self.section, "ignoring second resolution of deferred section");
            return false;
        }

        self.phase = match result {
            Ok(content) => {
                debug!(section = self.section, "deferred section ready");
                LoadPhase::Ready(content)
            }
            Err(err) => {
                warn!(section = self.section, error = %err, "deferred section failed, showing fallback");
                LoadPhase::Failed(err)
            }
        };
        true
    }
}

/// A one-shot asynchronous source for a section's content.
pub trait SectionLoader {
    type Output;

    fn load(self) -> impl Future<Output = Result<Self::Output, LoadError>>;
}

/// Run a loader to completion, logging the outcome.
pub async fn fetch<L: SectionLoader>(
    section: &'static str,
    loader: L,
) -> Result<L::Output, LoadError> {
    debug!(section, "deferred section requested");
    let result = loader.load().await;
    if let Err(err) = &result {
        debug!(section, error = %err, "deferred section load returned an error");
    }
    result
}

/// Yields its content once the browser has painted the next frame, keeping
/// the section out of the initial render.
pub struct AfterFirstPaint<T> {
    section: &'static str,
    content: T,
}

impl<T> AfterFirstPaint<T> {
    pub fn new(section: &'static str, content: T) -> Self {
        Self { section, content }
    }
}

impl<T> SectionLoader for AfterFirstPaint<T> {
    type Output = T;

    async fn load(self) -> Result<T, LoadError> {
        next_animation_frame(self.section).await?;
        Ok(self.content)
    }
}

async fn next_animation_frame(section: &'static str) -> Result<(), LoadError> {
    let window = web_sys::window().ok_or(LoadError::Unavailable { section })?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) = window.request_animation_frame(&resolve) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| LoadError::Js {
            section,
            message: format!("{err:?}"),
        })
}
