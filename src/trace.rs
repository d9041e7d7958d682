//! Internal logging macros.
//!
//! With the `tracing` feature enabled these forward to [`tracing`] at
//! `trace` level; without it they expand to nothing.

/// Emits a `trace`-level event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "sequor", $($argument)*);
    };
}

pub(crate) use trace_event;
