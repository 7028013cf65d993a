//! IEEE 1722.1 (AVDECC) entity model value types.
//!
//! This crate provides the in-memory representation of the AVDECC Entity
//! Model (AEM): the domain scalars exchanged in AECP-AEM payloads, the flag
//! bitsets, and the descriptor records a controller reads from an entity via
//! READ_DESCRIPTOR.
//!
//! Everything here is a plain value type: freely copyable or clonable,
//! comparable, and free of any wire-format knowledge. The byte-exact
//! encoding and decoding of these types lives in the `avdecc-aem-payload`
//! crate.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! model types (useful for dumping an enumerated entity model to JSON or
//! YAML; this is tooling output, not the wire format).

mod descriptors;
mod flags;
mod types;

pub use descriptors::*;
pub use flags::*;
pub use types::*;
