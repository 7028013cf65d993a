//! Payload size constants (IEEE 1722.1-2013 Clause 7.4).
//!
//! Fixed payloads carry a `_SIZE` constant; payloads with a variable tail
//! carry a `_MIN_SIZE`. Where the standard defines a response as having the
//! same layout as its command, the equality is asserted at compile time so
//! the two cannot silently diverge.

/// Largest AEM payload an AECP PDU can carry.
pub const MAX_AEM_PAYLOAD_LENGTH: usize = 524;

/// Width of the `{configuration_index, reserved}` prefix that precedes every
/// descriptor body in a READ_DESCRIPTOR response. Offsets declared inside
/// descriptor bodies are relative to the descriptor base, which sits this
/// many bytes into the buffer.
pub const DESCRIPTOR_BASE_OFFSET: usize = 4;

/// Wire width of one audio channel mapping.
pub const AUDIO_MAPPING_SIZE: usize = 8;

// --- Fixed-layout commands and responses ------------------------------------

pub const ACQUIRE_ENTITY_COMMAND_SIZE: usize = 16;
pub const ACQUIRE_ENTITY_RESPONSE_SIZE: usize = 16;

pub const LOCK_ENTITY_COMMAND_SIZE: usize = 16;
pub const LOCK_ENTITY_RESPONSE_SIZE: usize = 16;

pub const ENTITY_AVAILABLE_COMMAND_SIZE: usize = 0;
pub const ENTITY_AVAILABLE_RESPONSE_SIZE: usize = 0;

pub const CONTROLLER_AVAILABLE_COMMAND_SIZE: usize = 0;
pub const CONTROLLER_AVAILABLE_RESPONSE_SIZE: usize = 0;

pub const READ_DESCRIPTOR_COMMAND_SIZE: usize = 8;

pub const SET_CONFIGURATION_COMMAND_SIZE: usize = 4;
pub const SET_CONFIGURATION_RESPONSE_SIZE: usize = 4;
pub const GET_CONFIGURATION_COMMAND_SIZE: usize = 0;
pub const GET_CONFIGURATION_RESPONSE_SIZE: usize = 4;

pub const SET_STREAM_FORMAT_COMMAND_SIZE: usize = 12;
pub const SET_STREAM_FORMAT_RESPONSE_SIZE: usize = 12;
pub const GET_STREAM_FORMAT_COMMAND_SIZE: usize = 4;
pub const GET_STREAM_FORMAT_RESPONSE_SIZE: usize = 12;

pub const SET_STREAM_INFO_COMMAND_SIZE: usize = 48;
pub const SET_STREAM_INFO_RESPONSE_SIZE: usize = 48;
pub const GET_STREAM_INFO_COMMAND_SIZE: usize = 4;
pub const GET_STREAM_INFO_RESPONSE_SIZE: usize = 48;

pub const SET_NAME_COMMAND_SIZE: usize = 72;
pub const SET_NAME_RESPONSE_SIZE: usize = 72;
pub const GET_NAME_COMMAND_SIZE: usize = 8;
pub const GET_NAME_RESPONSE_SIZE: usize = 72;

pub const SET_SAMPLING_RATE_COMMAND_SIZE: usize = 8;
pub const SET_SAMPLING_RATE_RESPONSE_SIZE: usize = 8;
pub const GET_SAMPLING_RATE_COMMAND_SIZE: usize = 4;
pub const GET_SAMPLING_RATE_RESPONSE_SIZE: usize = 8;

pub const SET_CLOCK_SOURCE_COMMAND_SIZE: usize = 8;
pub const SET_CLOCK_SOURCE_RESPONSE_SIZE: usize = 8;
pub const GET_CLOCK_SOURCE_COMMAND_SIZE: usize = 4;
pub const GET_CLOCK_SOURCE_RESPONSE_SIZE: usize = 8;

pub const START_STREAMING_COMMAND_SIZE: usize = 4;
pub const START_STREAMING_RESPONSE_SIZE: usize = 4;
pub const STOP_STREAMING_COMMAND_SIZE: usize = 4;
pub const STOP_STREAMING_RESPONSE_SIZE: usize = 4;

pub const GET_AUDIO_MAP_COMMAND_SIZE: usize = 8;
pub const GET_AUDIO_MAP_RESPONSE_MIN_SIZE: usize = 12;

pub const ADD_AUDIO_MAPPINGS_COMMAND_MIN_SIZE: usize = 8;
pub const ADD_AUDIO_MAPPINGS_RESPONSE_MIN_SIZE: usize = 8;
pub const REMOVE_AUDIO_MAPPINGS_COMMAND_MIN_SIZE: usize = 8;
pub const REMOVE_AUDIO_MAPPINGS_RESPONSE_MIN_SIZE: usize = 8;

// --- READ_DESCRIPTOR response family ----------------------------------------

/// The `{configuration_index, reserved, descriptor_type, descriptor_index}`
/// header shared by every READ_DESCRIPTOR response.
pub const READ_COMMON_DESCRIPTOR_RESPONSE_SIZE: usize = 8;

pub const READ_ENTITY_DESCRIPTOR_RESPONSE_SIZE: usize = 316;
pub const READ_CONFIGURATION_DESCRIPTOR_RESPONSE_MIN_SIZE: usize = 78;
pub const READ_AUDIO_UNIT_DESCRIPTOR_RESPONSE_MIN_SIZE: usize = 148;
pub const READ_STREAM_DESCRIPTOR_RESPONSE_MIN_SIZE: usize = 138;
pub const READ_JACK_DESCRIPTOR_RESPONSE_SIZE: usize = 84;
pub const READ_AVB_INTERFACE_DESCRIPTOR_RESPONSE_SIZE: usize = 104;
pub const READ_CLOCK_SOURCE_DESCRIPTOR_RESPONSE_SIZE: usize = 92;
pub const READ_MEMORY_OBJECT_DESCRIPTOR_RESPONSE_SIZE: usize = 104;
pub const READ_LOCALE_DESCRIPTOR_RESPONSE_SIZE: usize = 76;
pub const READ_STRINGS_DESCRIPTOR_RESPONSE_SIZE: usize = 456;
pub const READ_STREAM_PORT_DESCRIPTOR_RESPONSE_SIZE: usize = 26;
pub const READ_EXTERNAL_PORT_DESCRIPTOR_RESPONSE_SIZE: usize = 30;
pub const READ_INTERNAL_PORT_DESCRIPTOR_RESPONSE_SIZE: usize = 30;
pub const READ_AUDIO_CLUSTER_DESCRIPTOR_RESPONSE_SIZE: usize = 91;
pub const READ_AUDIO_MAP_DESCRIPTOR_RESPONSE_MIN_SIZE: usize = 12;
pub const READ_CLOCK_DOMAIN_DESCRIPTOR_RESPONSE_MIN_SIZE: usize = 80;

// --- Command/response layout equalities -------------------------------------
//
// Each assert mirrors a "same as" rule in Clause 7.4. Editing one constant
// without its twin stops the build here.

const _: () = assert!(ACQUIRE_ENTITY_RESPONSE_SIZE == ACQUIRE_ENTITY_COMMAND_SIZE);
const _: () = assert!(LOCK_ENTITY_RESPONSE_SIZE == LOCK_ENTITY_COMMAND_SIZE);
const _: () = assert!(ENTITY_AVAILABLE_RESPONSE_SIZE == ENTITY_AVAILABLE_COMMAND_SIZE);
const _: () = assert!(CONTROLLER_AVAILABLE_RESPONSE_SIZE == CONTROLLER_AVAILABLE_COMMAND_SIZE);
const _: () = assert!(SET_CONFIGURATION_RESPONSE_SIZE == SET_CONFIGURATION_COMMAND_SIZE);
const _: () = assert!(GET_CONFIGURATION_RESPONSE_SIZE == SET_CONFIGURATION_COMMAND_SIZE);
const _: () = assert!(SET_STREAM_FORMAT_RESPONSE_SIZE == SET_STREAM_FORMAT_COMMAND_SIZE);
const _: () = assert!(GET_STREAM_FORMAT_RESPONSE_SIZE == SET_STREAM_FORMAT_COMMAND_SIZE);
const _: () = assert!(SET_STREAM_INFO_RESPONSE_SIZE == SET_STREAM_INFO_COMMAND_SIZE);
const _: () = assert!(GET_STREAM_INFO_RESPONSE_SIZE == SET_STREAM_INFO_COMMAND_SIZE);
const _: () = assert!(SET_NAME_RESPONSE_SIZE == SET_NAME_COMMAND_SIZE);
const _: () = assert!(GET_NAME_RESPONSE_SIZE == SET_NAME_COMMAND_SIZE);
const _: () = assert!(SET_SAMPLING_RATE_RESPONSE_SIZE == SET_SAMPLING_RATE_COMMAND_SIZE);
const _: () = assert!(GET_SAMPLING_RATE_RESPONSE_SIZE == SET_SAMPLING_RATE_COMMAND_SIZE);
const _: () = assert!(SET_CLOCK_SOURCE_RESPONSE_SIZE == SET_CLOCK_SOURCE_COMMAND_SIZE);
const _: () = assert!(GET_CLOCK_SOURCE_RESPONSE_SIZE == SET_CLOCK_SOURCE_COMMAND_SIZE);
const _: () = assert!(START_STREAMING_RESPONSE_SIZE == START_STREAMING_COMMAND_SIZE);
const _: () = assert!(STOP_STREAMING_COMMAND_SIZE == START_STREAMING_COMMAND_SIZE);
const _: () = assert!(STOP_STREAMING_RESPONSE_SIZE == START_STREAMING_COMMAND_SIZE);
const _: () = assert!(ADD_AUDIO_MAPPINGS_RESPONSE_MIN_SIZE == ADD_AUDIO_MAPPINGS_COMMAND_MIN_SIZE);
const _: () = assert!(REMOVE_AUDIO_MAPPINGS_COMMAND_MIN_SIZE == ADD_AUDIO_MAPPINGS_COMMAND_MIN_SIZE);
const _: () = assert!(REMOVE_AUDIO_MAPPINGS_RESPONSE_MIN_SIZE == ADD_AUDIO_MAPPINGS_COMMAND_MIN_SIZE);
