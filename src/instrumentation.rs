//! Span timing for the evaluator and the move orderer.
//!
//! Compiled only with `--features instrumentation`. Each instrumented function
//! opens a `tracing` span; [`TimingLayer`] measures the time spent inside it and
//! accumulates call counts per thread, so the rayon workers driving a benchmark
//! never contend on a shared map.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use once_cell::sync::Lazy;
use thread_local::ThreadLocal;
use tracing::span;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SpanTiming {
    pub calls: u64,
    pub nanos: u64,
}

impl SpanTiming {
    fn record(&mut self, nanos: u64) {
        self.calls += 1;
        self.nanos += nanos;
    }

    fn merge(&mut self, other: &SpanTiming) {
        self.calls += other.calls;
        self.nanos += other.nanos;
    }

    pub fn average_micros(&self) -> f64 {
        if self.calls == 0 {
            return 0.0;
        }
        self.nanos as f64 / self.calls as f64 / 1_000.0
    }
}

type ThreadTimings = Mutex<HashMap<&'static str, SpanTiming>>;

static TIMINGS: Lazy<ThreadLocal<ThreadTimings>> = Lazy::new(ThreadLocal::new);

/// Stamps each span on entry and books the elapsed time against its name on exit.
pub struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let Some(started) = span.extensions_mut().remove::<Instant>() else {
            return;
        };

        let nanos = started.elapsed().as_nanos() as u64;
        let cell = TIMINGS.get_or(|| Mutex::new(HashMap::new()));
        if let Ok(mut timings) = cell.lock() {
            timings.entry(span.name()).or_default().record(nanos);
        }
    }
}

/// Installs the global subscriber. Timing is always collected; span events are
/// also printed when `RUST_LOG` asks for them.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let verbose = std::env::var("RUST_LOG")
        .map(|filter| !filter.is_empty() && filter != "off")
        .unwrap_or(false);

    if verbose {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    }
}

/// Timings merged across every thread that recorded a span, slowest total first.
pub fn timing_statistics() -> Vec<(&'static str, SpanTiming)> {
    let mut merged: HashMap<&'static str, SpanTiming> = HashMap::new();

    for cell in TIMINGS.iter() {
        if let Ok(timings) = cell.lock() {
            for (name, timing) in timings.iter() {
                merged.entry(*name).or_default().merge(timing);
            }
        }
    }

    let mut entries: Vec<_> = merged.into_iter().collect();
    entries.sort_by_key(|(_, timing)| std::cmp::Reverse(timing.nanos));
    entries
}

pub fn print_timing_statistics() {
    let entries = timing_statistics();
    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    eprintln!("\n{:=<72}", "");
    eprintln!(
        "{:<32} {:>12} {:>12} {:>12}",
        "Span", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<72}", "");

    for (name, timing) in &entries {
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            name,
            timing.calls,
            timing.nanos as f64 / 1_000_000.0,
            timing.average_micros()
        );
    }

    eprintln!("{:=<72}", "");
}
