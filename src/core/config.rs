/*!
 * Guard Configuration
 *
 * Per-container settings for critical-section observability
 */

use std::time::Duration;

/// Guard configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardConfig {
    /// Label attached to every log event emitted by the container
    pub name: &'static str,
    /// Wrap each critical section in a timed span
    pub trace_sections: bool,
    /// Hold time above which a traced section is reported as slow
    pub slow_section_threshold: Duration,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::named("guarded")
    }
}

impl GuardConfig {
    /// Untraced configuration with a custom label
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            trace_sections: false,
            slow_section_threshold: Duration::from_millis(10),
        }
    }

    /// Configuration for hunting lock hold-time problems
    pub const fn diagnostic(name: &'static str) -> Self {
        Self {
            name,
            trace_sections: true,
            slow_section_threshold: Duration::from_millis(1),
        }
    }

    /// Enable critical-section spans
    pub const fn traced(mut self) -> Self {
        self.trace_sections = true;
        self
    }

    /// Override the slow-section threshold
    pub const fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_section_threshold = threshold;
        self
    }
}
