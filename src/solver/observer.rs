use tracing::debug;

/// Progress snapshot emitted after a pass has run.
#[derive(Debug, Clone, Copy)]
pub struct PassEvent<'a> {
    pub pass: &'a str,
    pub pairs_known: usize,
    pub pairs_total: usize,
}

/// Receives progress notifications from the engine.
///
/// Purely informational: an observer has no effect on solving semantics, and
/// the engine never inspects anything it does.
pub trait ProgressObserver {
    fn on_pass(&self, event: &PassEvent<'_>);
}

/// An observer that ignores everything. The default.
#[derive(Debug, Default)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_pass(&self, _event: &PassEvent<'_>) {}
}

/// Logs each pass with the fraction of pairs decided so far.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_pass(&self, event: &PassEvent<'_>) {
        let percent = if event.pairs_total == 0 {
            100.0
        } else {
            100.0 * event.pairs_known as f64 / event.pairs_total as f64
        };
        debug!(
            pass = event.pass,
            known = event.pairs_known,
            total = event.pairs_total,
            percent,
            "pass finished"
        );
    }
}
