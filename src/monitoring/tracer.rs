/*!
 * Critical Section Tracing
 * Structured tracing for lock hold times using the tracing crate
 *
 * Features:
 * - JSON-formatted logs for structured parsing
 * - One span per traced critical section
 * - Slow-section warnings carrying container, operation and lock mode
 */

use crate::core::LockMode;
use std::time::{Duration, Instant};
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - GUARDED_TRACE_JSON: Enable JSON output (default: false)
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = env_flag("GUARDED_TRACE_JSON", false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

/// Boolean switch read from the environment
///
/// Accepts `1`/`0`, `true`/`false`, `yes`/`no` and `on`/`off` in any case.
/// Unset or unrecognized values fall back to `default`.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
            warn!(key, value = %raw, default, "Invalid boolean setting, using default");
            default
        }),
        Err(_) => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Timed span covering one critical section
///
/// Created right after the lock is acquired and dropped right before it is
/// released, so the recorded duration is the hold time, not the wait time.
pub struct CriticalSection {
    span: tracing::Span,
    start: Instant,
    container: &'static str,
    operation: &'static str,
    mode: LockMode,
    slow_threshold: Duration,
}

impl CriticalSection {
    pub fn enter(
        container: &'static str,
        operation: &'static str,
        mode: LockMode,
        slow_threshold: Duration,
    ) -> Self {
        let span = span!(
            Level::DEBUG,
            "critical_section",
            container = container,
            operation = operation,
            mode = mode.as_str(),
            hold_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            container,
            operation,
            mode,
            slow_threshold,
        }
    }

    /// Time spent inside the section so far
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for CriticalSection {
    fn drop(&mut self) {
        let held = self.start.elapsed();
        self.span.record("hold_us", held.as_micros() as u64);
        let _entered = self.span.enter();

        if held > self.slow_threshold {
            warn!(
                container = self.container,
                operation = self.operation,
                mode = self.mode.as_str(),
                hold_us = held.as_micros() as u64,
                threshold_us = self.slow_threshold.as_micros() as u64,
                slow = true,
                "slow critical section"
            );
        } else {
            debug!(
                container = self.container,
                operation = self.operation,
                hold_us = held.as_micros() as u64,
                "critical section released"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_measures_hold_time() {
        let section = CriticalSection::enter(
            "test",
            "sleep",
            LockMode::Exclusive,
            Duration::from_secs(60),
        );
        std::thread::sleep(Duration::from_millis(5));
        assert!(section.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_parse_flag_accepts_numeric_and_words() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_env_flag_unset_uses_default() {
        assert!(env_flag("GUARDED_TEST_UNSET_FLAG", true));
        assert!(!env_flag("GUARDED_TEST_UNSET_FLAG", false));
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
