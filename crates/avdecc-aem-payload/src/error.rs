//! Codec error types.

use thiserror::Error;

/// Errors produced while encoding or decoding an AEM payload.
///
/// A failure is local to the single payload being processed; the codec keeps
/// no state across calls. Callers report the error to their transport layer,
/// which typically maps it to an AECP `NOT_SUPPORTED` / `BAD_ARGUMENTS`
/// status or drops the PDU.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The buffer is shorter than the payload's fixed or minimum size, or a
    /// variable tail is shorter than `count x element_size`.
    #[error("truncated payload: need {needed} bytes, {available} available")]
    TruncatedPayload {
        /// Bytes required to continue decoding.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// A declared variable-region offset, re-anchored to the buffer start,
    /// precedes the bytes already consumed or lies past the buffer end.
    #[error("bad offset {offset}: valid range is {valid_from}..={valid_to}")]
    BadOffset {
        /// The offending (re-anchored) offset.
        offset: usize,
        /// First acceptable position.
        valid_from: usize,
        /// Last acceptable position.
        valid_to: usize,
    },

    /// An enum-typed field holds a value outside its defined domain at a
    /// point where the value selects the decode path.
    #[error("unknown value {value:#06x} for {field}")]
    UnknownValue {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value.
        value: u32,
    },

    /// An encoder was asked to write past its buffer capacity.
    #[error("capacity exceeded: {requested} bytes requested, {capacity} total")]
    CapacityExceeded {
        /// Total bytes the write would occupy.
        requested: usize,
        /// Buffer capacity.
        capacity: usize,
    },
}
