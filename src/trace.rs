//! Tracing hooks that vanish when the `tracing` feature is off.
//!
//! Call sites always write `let _span = trace_span!(..).entered();` and
//! `trace_event!(..)`; with the feature disabled both expand to no-ops and
//! the crate has no `tracing` dependency at all. Disabled events still
//! type-check their field expressions but never evaluate them.

/// Opens an info-level span around a detection or matching pass.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an info-level event with counts for the current pass.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        if false {
            let _ = ($($value,)+);
        }
    };
}

/// Emits a debug-level event for per-candidate decisions.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        if false {
            let _ = ($($value,)+);
        }
    };
}

#[allow(unused_imports)]
pub(crate) use trace_debug;
pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in span guard used when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::entered`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    use std::cell::Cell;

    #[test]
    fn disabled_events_skip_field_expressions() {
        let calls = Cell::new(0usize);
        let count = || {
            calls.set(calls.get() + 1);
            calls.get()
        };
        trace_event!("pass", total = count());
        trace_debug!("candidate", index = count(), other = count());
        assert_eq!(calls.get(), 0);
    }
}
