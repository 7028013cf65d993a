//! Diagnostic sink for decode warnings.
//!
//! A buffer can legally be longer than the payload it carries; the standard
//! does not make trailing bytes an error. Decoders report them through a
//! [`TraceSink`] supplied by the caller, so a controller can log them and a
//! test can capture them without the codec holding any global state.

use tracing::trace;

/// Receiver for non-fatal decode diagnostics.
pub trait TraceSink {
    /// Called when `remaining` bytes were left over after a complete decode
    /// of the payload identified by `context`.
    fn trailing_bytes(&self, context: &'static str, remaining: usize);
}

/// Sink that drops every diagnostic. The default choice for callers that do
/// not care about trailing bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardTrace;

impl TraceSink for DiscardTrace {
    fn trailing_bytes(&self, _context: &'static str, _remaining: usize) {}
}

/// Sink that forwards diagnostics to the `tracing` subscriber at TRACE
/// level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn trailing_bytes(&self, context: &'static str, remaining: usize) {
        trace!(context, remaining, "trailing bytes after payload decode");
    }
}
