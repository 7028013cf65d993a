//! Bit-exact codec for IEEE 1722.1 AECP-AEM command and response payloads.
//!
//! This crate moves between the value types of [`avdecc_model`] and the
//! on-wire payload layouts of IEEE 1722.1-2013 Clause 7.4. It covers the
//! entity acquisition commands, configuration and stream control, the
//! READ_DESCRIPTOR response family, and the audio-map commands. Framing,
//! transport and entity state live elsewhere; this crate only ever sees one
//! payload buffer at a time.
//!
//! # Layout rules
//!
//! - Every multi-byte integer is big-endian.
//! - Every payload has a fixed `_SIZE` or a variable `_MIN_SIZE` constant in
//!   [`constants`]; serializers produce exactly that many bytes (or at least
//!   the minimum), deserializers reject anything shorter.
//! - Responses the standard defines as "same as command" are forwarders to
//!   the command codec, with the size equality asserted at compile time.
//! - Offsets inside READ_DESCRIPTOR response bodies are relative to the
//!   descriptor base (4 bytes into the buffer) and are re-anchored and
//!   bounds-checked before any seek.
//!
//! # Example
//!
//! ```rust
//! use avdecc_aem_payload::{
//!     deserialize_acquire_entity_command, serialize_acquire_entity_command, AcquireEntity,
//! };
//! use avdecc_model::{AcquireEntityFlags, DescriptorType, UniqueIdentifier};
//!
//! let cmd = AcquireEntity {
//!     flags: AcquireEntityFlags::PERSISTENT,
//!     owner_id: UniqueIdentifier::new(0x0011223344556677),
//!     descriptor_type: DescriptorType::Entity,
//!     descriptor_index: 0,
//! };
//! let wire = serialize_acquire_entity_command(&cmd).unwrap();
//! assert_eq!(deserialize_acquire_entity_command(wire.as_slice()).unwrap(), cmd);
//! ```
//!
//! The codec is pure: no globals, no I/O, no state between calls. Any number
//! of encodes and decodes may run concurrently on independent buffers.

mod audio_map;
mod buffer;
mod commands;
pub mod constants;
mod descriptors;
mod error;
mod trace;

pub use audio_map::*;
pub use buffer::{Reader, Writer};
pub use commands::*;
pub use constants::MAX_AEM_PAYLOAD_LENGTH;
pub use descriptors::*;
pub use error::ProtocolError;
pub use trace::{DiscardTrace, LogTrace, TraceSink};

/// Reject a payload shorter than the message's declared size.
pub(crate) fn ensure_len(payload: &[u8], needed: usize) -> Result<(), ProtocolError> {
    if payload.len() < needed {
        return Err(ProtocolError::TruncatedPayload {
            needed,
            available: payload.len(),
        });
    }
    Ok(())
}
