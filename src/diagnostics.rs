//! Diagnostic sink for non-fatal parser notices
//!
//! The header parser reports headers it skips through a [`DiagnosticSink`]
//! instead of logging directly, so callers can capture or silence them.

/// Receives free-form diagnostic notices
pub trait DiagnosticSink: Send + Sync {
    fn notice(&self, message: &str);
}

/// Default sink, forwarding notices to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn notice(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn notice(&self, _message: &str) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notice(&self, message: &str) {
        self(message)
    }
}
