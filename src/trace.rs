//! Trace hooks for sequence steps.
//!
//! With the `tracing` feature disabled every hook is a no-op.

#[cfg(feature = "tracing")]
pub(crate) fn step(operation: &'static str, input: usize, output: usize) {
    tracing::trace!(operation, input, output, "sequence step");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn step(_operation: &'static str, _input: usize, _output: usize) {}
