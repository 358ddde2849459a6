//! Observability: typed query telemetry behind a sink boundary.
//!
//! Engine logic never touches the counter state directly; all
//! instrumentation flows through `MetricsEvent` and `record`. The default
//! sink is a set of thread-local counters readable via `metrics_report`.

use std::cell::RefCell;

thread_local! {
    static COUNTERS: RefCell<EventReport> = RefCell::new(EventReport::default());
}

///
/// QueryKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryKind {
    Count,
    Select,
    Distinct,
    Column,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    Query { kind: QueryKind },
    RowsScanned { rows: u64 },
    RowsReturned { rows: u64 },
}

///
/// EventReport
///
/// Point-in-time snapshot of the thread's query counters.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EventReport {
    pub counts: u64,
    pub selects: u64,
    pub distincts: u64,
    pub columns: u64,
    pub rows_scanned: u64,
    pub rows_returned: u64,
}

///
/// MetricsSink
///
/// Consumer of instrumentation events. The built-in thread-local counters
/// implement this; embedders can forward events elsewhere by recording
/// into their own sink implementation.
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

struct ThreadLocalSink;

impl MetricsSink for ThreadLocalSink {
    fn record(&self, event: MetricsEvent) {
        COUNTERS.with_borrow_mut(|counters| match event {
            MetricsEvent::Query { kind } => match kind {
                QueryKind::Count => counters.counts += 1,
                QueryKind::Select => counters.selects += 1,
                QueryKind::Distinct => counters.distincts += 1,
                QueryKind::Column => counters.columns += 1,
            },
            MetricsEvent::RowsScanned { rows } => counters.rows_scanned += rows,
            MetricsEvent::RowsReturned { rows } => counters.rows_returned += rows,
        });
    }
}

/// Record an event into the default sink.
pub fn record(event: MetricsEvent) {
    ThreadLocalSink.record(event);
}

/// Snapshot the thread's counters.
#[must_use]
pub fn metrics_report() -> EventReport {
    COUNTERS.with_borrow(|counters| *counters)
}

/// Reset the thread's counters to zero.
pub fn metrics_reset_all() {
    COUNTERS.with_borrow_mut(|counters| *counters = EventReport::default());
}
