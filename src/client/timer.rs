use leptos::prelude::*;

/// Quiet period before a search box reports its value.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// How long a copy button shows its "copied" state.
pub const COPY_ACK_DURATION_MS: u32 = 2_000;

/// A single cancellable delayed callback owned by the current component.
///
/// Scheduling replaces (and cancels) the pending callback; when the owning
/// component is torn down the pending callback is dropped without running.
/// On the server nothing is ever scheduled.
#[derive(Clone, Copy)]
pub struct PendingTimeout {
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl PendingTimeout {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(None),
        }
    }

    /// Run `callback` after `delay_ms`, cancelling whatever was pending.
    #[cfg(feature = "hydrate")]
    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let timeout = gloo_timers::callback::Timeout::new(delay_ms, callback);
        // Owner already disposed: the returned timeout is dropped, which cancels it
        let _ = self.pending.try_set_value(Some(timeout));
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn schedule(&self, _delay_ms: u32, _callback: impl FnOnce() + 'static) {}

    /// Drop the pending callback, if any.
    pub fn cancel(&self) {
        #[cfg(feature = "hydrate")]
        let _ = self.pending.try_set_value(None);
    }
}

impl Default for PendingTimeout {
    fn default() -> Self {
        Self::new()
    }
}
