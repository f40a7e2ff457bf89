/*!
 * Stress Harness
 *
 * Readers sum a guarded container while one writer keeps adding and removing
 * a marker element. Each whole-container traversal runs under one shared
 * section, so every sum must equal either the base total or the base total
 * plus the marker. Anything else is a torn read.
 */

use crate::associative::ConcurrentHashMap;
use crate::core::GuardConfig;
use crate::monitoring::env_flag;
use miette::Diagnostic;
use crate::sequence::ConcurrentVec;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Barrier;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// Stress run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressConfig {
    /// Concurrent reader threads
    pub readers: usize,
    /// Insert/erase pairs for the writer, and the minimum number of
    /// traversals per reader (readers keep going until the writer finishes)
    pub iterations: usize,
    /// Elements present before the run starts
    pub elements: usize,
    /// Wrap every critical section in a timed span
    pub trace_sections: bool,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            readers: 4,
            iterations: 10_000,
            elements: 1_000,
            trace_sections: false,
        }
    }
}

impl StressConfig {
    /// Defaults overridden by `STRESS_READERS`, `STRESS_ITERATIONS`,
    /// `STRESS_ELEMENTS` and `STRESS_TRACE_SECTIONS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            readers: env_or("STRESS_READERS", defaults.readers),
            iterations: env_or("STRESS_ITERATIONS", defaults.iterations),
            elements: env_or("STRESS_ELEMENTS", defaults.elements),
            trace_sections: env_flag("STRESS_TRACE_SECTIONS", defaults.trace_sections),
        }
    }

    fn guard_config(&self, name: &'static str) -> GuardConfig {
        let config = GuardConfig::named(name);
        if self.trace_sections {
            config.traced()
        } else {
            config
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, ?default, "Invalid stress setting, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Outcome of one stress scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressReport {
    pub scenario: &'static str,
    /// Sums taken by all readers
    pub observed: u64,
    /// Sums that saw the marker, proving readers overlapped the writer
    pub post_mutation: u64,
    /// Sums matching neither the pre- nor the post-insert total
    pub torn: u64,
    pub elapsed: Duration,
}

impl StressReport {
    pub fn is_clean(&self) -> bool {
        self.torn == 0
    }

    /// At least one reader observed the writer's intermediate state
    pub fn overlapped(&self) -> bool {
        self.post_mutation > 0
    }
}

/// Failed stress run, rendered by miette from the binary
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum StressError {
    #[error("{torn} torn reads observed across {scenarios} scenario(s)")]
    #[diagnostic(
        code(stress::torn_reads),
        help("A traversal saw a partially applied write. Every whole-container read must run under one shared section.")
    )]
    TornReads { scenarios: usize, torn: u64 },
}

/// Fold scenario reports into one verdict
pub fn verdict(reports: &[StressReport]) -> Result<(), StressError> {
    let failed: Vec<&StressReport> = reports.iter().filter(|report| !report.is_clean()).collect();
    if failed.is_empty() {
        return Ok(());
    }
    Err(StressError::TornReads {
        scenarios: failed.len(),
        torn: failed.iter().map(|report| report.torn).sum(),
    })
}

struct Tally {
    observed: AtomicU64,
    post_mutation: AtomicU64,
    torn: AtomicU64,
}

impl Tally {
    fn new() -> Self {
        Self {
            observed: AtomicU64::new(0),
            post_mutation: AtomicU64::new(0),
            torn: AtomicU64::new(0),
        }
    }

    fn record(&self, sum: u64, base: u64, marker: u64) {
        self.observed.fetch_add(1, Ordering::Relaxed);
        if sum == base + marker {
            self.post_mutation.fetch_add(1, Ordering::Relaxed);
        } else if sum != base {
            self.torn.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn report(self, scenario: &'static str, started: Instant) -> StressReport {
        let report = StressReport {
            scenario,
            observed: self.observed.into_inner(),
            post_mutation: self.post_mutation.into_inner(),
            torn: self.torn.into_inner(),
            elapsed: started.elapsed(),
        };
        info!(
            scenario,
            observed = report.observed,
            post_mutation = report.post_mutation,
            torn = report.torn,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Stress scenario finished"
        );
        report
    }
}

/// Sum a `ConcurrentVec` from `readers` threads while a writer pushes and
/// erases a marker element
pub fn run_sequence_stress(config: &StressConfig) -> StressReport {
    let elements = config.elements as u64;
    let vec = ConcurrentVec::with_config(
        (1..=elements).collect(),
        config.guard_config("stress.sequence"),
    );
    let base: u64 = (1..=elements).sum();
    let marker = elements + 1;
    let tally = Tally::new();

    info!(
        readers = config.readers,
        iterations = config.iterations,
        elements,
        "Starting sequence stress"
    );
    let started = Instant::now();

    let start_line = Barrier::new(config.readers + 1);
    let writer_done = AtomicBool::new(false);

    thread::scope(|scope| {
        scope.spawn(|| {
            start_line.wait();
            for _ in 0..config.iterations {
                vec.push_back(marker);
                thread::yield_now();
                vec.erase(|&value| value == marker);
            }
            writer_done.store(true, Ordering::Release);
        });

        for _ in 0..config.readers {
            scope.spawn(|| {
                start_line.wait();
                let mut sums = 0;
                while sums < config.iterations || !writer_done.load(Ordering::Acquire) {
                    let mut sum = 0;
                    vec.for_each(|value| sum += value);
                    tally.record(sum, base, marker);
                    sums += 1;
                }
            });
        }
    });

    tally.report("sequence", started)
}

/// Sum the values of a `ConcurrentHashMap` from `readers` threads while a
/// writer inserts and removes a marker entry
pub fn run_map_stress(config: &StressConfig) -> StressReport {
    let elements = config.elements as u64;
    let map: ConcurrentHashMap<u64, u64> = ConcurrentHashMap::with_config(
        (0..elements).map(|key| (key, key + 1)).collect(),
        config.guard_config("stress.map"),
    );
    let base: u64 = (1..=elements).sum();
    let marker = elements + 1;
    let tally = Tally::new();

    info!(
        readers = config.readers,
        iterations = config.iterations,
        elements,
        "Starting map stress"
    );
    let started = Instant::now();

    let start_line = Barrier::new(config.readers + 1);
    let writer_done = AtomicBool::new(false);

    thread::scope(|scope| {
        scope.spawn(|| {
            start_line.wait();
            for _ in 0..config.iterations {
                map.insert(marker, marker);
                thread::yield_now();
                map.remove(&marker);
            }
            writer_done.store(true, Ordering::Release);
        });

        for _ in 0..config.readers {
            scope.spawn(|| {
                start_line.wait();
                let mut sums = 0;
                while sums < config.iterations || !writer_done.load(Ordering::Acquire) {
                    let mut sum = 0;
                    map.for_each(|_, value| sum += value);
                    tally.record(sum, base, marker);
                    sums += 1;
                }
            });
        }
    });

    tally.report("map", started)
}
