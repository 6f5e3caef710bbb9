//! Opt-in tracing setup for hosts embedding `starplot-rs`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the host. These helpers exist for demos and quick debugging sessions.

/// Default directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "starplot_rs=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with an explicit fallback directive,
/// e.g. `"starplot_rs=trace"` to log every eased frame.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::{init_default_tracing, init_tracing_with_filter};

    #[test]
    fn helpers_are_inert_without_the_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_filter("starplot_rs=trace"));
    }
}
