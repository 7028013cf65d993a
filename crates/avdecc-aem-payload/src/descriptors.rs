//! READ_DESCRIPTOR response decoders (Clause 7.4.5.2).
//!
//! Every READ_DESCRIPTOR response starts with the common 8-byte header
//! `{configuration_index, reserved, descriptor_type, descriptor_index}`.
//! When the response status is not `Success`, only that header is valid and
//! the descriptor body decoders return a default-initialized descriptor.
//!
//! Descriptors with a variable tail declare its location as an offset from
//! the *descriptor base*: byte 0 of the descriptor body, which sits
//! [`DESCRIPTOR_BASE_OFFSET`] bytes into the response buffer. Decoders
//! re-anchor the offset to the buffer before seeking, and reject offsets
//! that would land inside the fixed region already consumed.
//!
//! Trailing bytes after a complete decode are reported through the caller's
//! [`TraceSink`] and are not an error.

use avdecc_model::{
    AecpStatus, AudioClusterDescriptor, AudioMapDescriptor, AudioMapping, AudioUnitDescriptor,
    AvbInterfaceDescriptor, AvbInterfaceFlags, ClockDomainDescriptor, ClockSourceDescriptor,
    ClockSourceFlags, ConfigurationDescriptor, ConfigurationIndex, DescriptorIndex,
    DescriptorType, EntityDescriptor, JackDescriptor, JackFlags, LocaleDescriptor,
    MemoryObjectDescriptor, PortFlags, StreamDescriptor, StreamFlags, StreamPortDescriptor,
    StringsDescriptor, ExternalPortDescriptor, InternalPortDescriptor,
};

use crate::buffer::Reader;
use crate::constants::*;
use crate::ensure_len;
use crate::error::ProtocolError;
use crate::trace::TraceSink;

/// The decoded common header of a READ_DESCRIPTOR response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadDescriptorCommonResponse {
    /// Bytes consumed by the common header; descriptor body decoders resume
    /// from this position.
    pub header_len: usize,
    pub configuration_index: ConfigurationIndex,
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
}

/// Decode the common header shared by every READ_DESCRIPTOR response.
pub fn deserialize_read_descriptor_common_response(
    payload: &[u8],
) -> Result<ReadDescriptorCommonResponse, ProtocolError> {
    ensure_len(payload, READ_COMMON_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);

    let configuration_index = des.get_u16()?;
    let _reserved = des.get_u16()?;
    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_COMMON_DESCRIPTOR_RESPONSE_SIZE);
    Ok(ReadDescriptorCommonResponse {
        header_len: des.position(),
        configuration_index,
        descriptor_type,
        descriptor_index,
    })
}

/// Validate a variable tail and move the cursor to its start.
///
/// `declared_offset` is relative to the descriptor base; re-anchoring adds
/// the 4-byte `{configuration_index, reserved}` prefix. The tail must fit in
/// the bytes remaining after the fixed region, and the re-anchored offset
/// must not point back into bytes already consumed.
fn seek_descriptor_tail(
    des: &mut Reader<'_>,
    declared_offset: u16,
    tail_size: usize,
) -> Result<(), ProtocolError> {
    if des.remaining() < tail_size {
        return Err(ProtocolError::TruncatedPayload {
            needed: tail_size,
            available: des.remaining(),
        });
    }

    let offset = declared_offset as usize + DESCRIPTOR_BASE_OFFSET;
    if offset < des.position() {
        return Err(ProtocolError::BadOffset {
            offset,
            valid_from: des.position(),
            valid_to: des.position() + des.remaining(),
        });
    }
    des.set_position(offset)
}

/// ENTITY descriptor response body (Clause 7.2.1).
pub fn deserialize_read_entity_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<EntityDescriptor, ProtocolError> {
    let mut descriptor = EntityDescriptor::default();

    // Only the common header is valid on a non-success response.
    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_ENTITY_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.entity_id = des.get_unique_identifier()?;
    descriptor.vendor_entity_model_id = des.get_unique_identifier()?;
    descriptor.entity_capabilities = des.get_u32()?;
    descriptor.talker_stream_sources = des.get_u16()?;
    descriptor.talker_capabilities = des.get_u16()?;
    descriptor.listener_stream_sinks = des.get_u16()?;
    descriptor.listener_capabilities = des.get_u16()?;
    descriptor.controller_capabilities = des.get_u32()?;
    descriptor.available_index = des.get_u32()?;
    descriptor.association_id = des.get_unique_identifier()?;
    descriptor.entity_name = des.get_fixed_string()?;
    descriptor.vendor_name_string = des.get_u16()?;
    descriptor.model_name_string = des.get_u16()?;
    descriptor.firmware_version = des.get_fixed_string()?;
    descriptor.group_name = des.get_fixed_string()?;
    descriptor.serial_number = des.get_fixed_string()?;
    descriptor.configurations_count = des.get_u16()?;
    descriptor.current_configuration = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_ENTITY_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("ENTITY", des.remaining());
    }

    Ok(descriptor)
}

/// CONFIGURATION descriptor response body (Clause 7.2.2).
///
/// The descriptor count entries follow the fixed region directly; the
/// `descriptor_counts_offset` field is read but carries no information the
/// decoder needs.
pub fn deserialize_read_configuration_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<ConfigurationDescriptor, ProtocolError> {
    let mut descriptor = ConfigurationDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_CONFIGURATION_DESCRIPTOR_RESPONSE_MIN_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    let counts_count = des.get_u16()? as usize;
    let _counts_offset = des.get_u16()?;

    let entry_size = 4; // descriptor_type + count
    let counts_size = entry_size * counts_count;
    if des.remaining() < counts_size {
        return Err(ProtocolError::TruncatedPayload {
            needed: counts_size,
            available: des.remaining(),
        });
    }

    for _ in 0..counts_count {
        let descriptor_type = des.get_descriptor_type()?;
        let count = des.get_u16()?;
        descriptor.descriptor_counts.insert(descriptor_type, count);
    }

    if des.remaining() != 0 {
        trace.trailing_bytes("CONFIGURATION", des.remaining());
    }

    Ok(descriptor)
}

/// AUDIO_UNIT descriptor response body (Clause 7.2.3).
pub fn deserialize_read_audio_unit_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<AudioUnitDescriptor, ProtocolError> {
    let mut descriptor = AudioUnitDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_AUDIO_UNIT_DESCRIPTOR_RESPONSE_MIN_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    descriptor.clock_domain_index = des.get_u16()?;
    descriptor.number_of_stream_input_ports = des.get_u16()?;
    descriptor.base_stream_input_port = des.get_u16()?;
    descriptor.number_of_stream_output_ports = des.get_u16()?;
    descriptor.base_stream_output_port = des.get_u16()?;
    descriptor.number_of_external_input_ports = des.get_u16()?;
    descriptor.base_external_input_port = des.get_u16()?;
    descriptor.number_of_external_output_ports = des.get_u16()?;
    descriptor.base_external_output_port = des.get_u16()?;
    descriptor.number_of_internal_input_ports = des.get_u16()?;
    descriptor.base_internal_input_port = des.get_u16()?;
    descriptor.number_of_internal_output_ports = des.get_u16()?;
    descriptor.base_internal_output_port = des.get_u16()?;
    descriptor.number_of_controls = des.get_u16()?;
    descriptor.base_control = des.get_u16()?;
    descriptor.number_of_signal_selectors = des.get_u16()?;
    descriptor.base_signal_selector = des.get_u16()?;
    descriptor.number_of_mixers = des.get_u16()?;
    descriptor.base_mixer = des.get_u16()?;
    descriptor.number_of_matrices = des.get_u16()?;
    descriptor.base_matrix = des.get_u16()?;
    descriptor.number_of_splitters = des.get_u16()?;
    descriptor.base_splitter = des.get_u16()?;
    descriptor.number_of_combiners = des.get_u16()?;
    descriptor.base_combiner = des.get_u16()?;
    descriptor.number_of_demultiplexers = des.get_u16()?;
    descriptor.base_demultiplexer = des.get_u16()?;
    descriptor.number_of_multiplexers = des.get_u16()?;
    descriptor.base_multiplexer = des.get_u16()?;
    descriptor.number_of_transcoders = des.get_u16()?;
    descriptor.base_transcoder = des.get_u16()?;
    descriptor.number_of_control_blocks = des.get_u16()?;
    descriptor.base_control_block = des.get_u16()?;
    descriptor.current_sampling_rate = des.get_sampling_rate()?;
    let rates_offset = des.get_u16()?;
    let rates_count = des.get_u16()? as usize;

    debug_assert_eq!(des.position(), READ_AUDIO_UNIT_DESCRIPTOR_RESPONSE_MIN_SIZE);
    seek_descriptor_tail(&mut des, rates_offset, 4 * rates_count)?;

    for _ in 0..rates_count {
        descriptor.sampling_rates.insert(des.get_sampling_rate()?);
    }

    if des.remaining() != 0 {
        trace.trailing_bytes("AUDIO_UNIT", des.remaining());
    }

    Ok(descriptor)
}

/// STREAM_INPUT / STREAM_OUTPUT descriptor response body (Clause 7.2.6).
pub fn deserialize_read_stream_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<StreamDescriptor, ProtocolError> {
    let mut descriptor = StreamDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_STREAM_DESCRIPTOR_RESPONSE_MIN_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    descriptor.clock_domain_index = des.get_u16()?;
    descriptor.stream_flags = StreamFlags::from_bits_retain(des.get_u32()?);
    descriptor.current_format = des.get_stream_format()?;
    let formats_offset = des.get_u16()?;
    let formats_count = des.get_u16()? as usize;
    descriptor.backup_talker_entity_id_0 = des.get_unique_identifier()?;
    descriptor.backup_talker_unique_id_0 = des.get_u16()?;
    descriptor.backup_talker_entity_id_1 = des.get_unique_identifier()?;
    descriptor.backup_talker_unique_id_1 = des.get_u16()?;
    descriptor.backup_talker_entity_id_2 = des.get_unique_identifier()?;
    descriptor.backup_talker_unique_id_2 = des.get_u16()?;
    descriptor.backedup_talker_entity_id = des.get_unique_identifier()?;
    descriptor.backedup_talker_unique = des.get_u16()?;
    descriptor.avb_interface_index = des.get_u16()?;
    descriptor.buffer_length = des.get_u32()?;

    debug_assert_eq!(des.position(), READ_STREAM_DESCRIPTOR_RESPONSE_MIN_SIZE);
    seek_descriptor_tail(&mut des, formats_offset, 8 * formats_count)?;

    for _ in 0..formats_count {
        descriptor.formats.insert(des.get_stream_format()?);
    }

    if des.remaining() != 0 {
        trace.trailing_bytes("STREAM", des.remaining());
    }

    Ok(descriptor)
}

/// JACK_INPUT / JACK_OUTPUT descriptor response body (Clause 7.2.7).
pub fn deserialize_read_jack_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<JackDescriptor, ProtocolError> {
    let mut descriptor = JackDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_JACK_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    descriptor.jack_flags = JackFlags::from_bits_retain(des.get_u32()?);
    descriptor.jack_type = des.get_u16()?;
    descriptor.number_of_controls = des.get_u16()?;
    descriptor.base_control = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_JACK_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("JACK", des.remaining());
    }

    Ok(descriptor)
}

/// AVB_INTERFACE descriptor response body (Clause 7.2.8).
pub fn deserialize_read_avb_interface_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<AvbInterfaceDescriptor, ProtocolError> {
    let mut descriptor = AvbInterfaceDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_AVB_INTERFACE_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    descriptor.mac_address = des.get_mac_address()?;
    descriptor.interface_flags = AvbInterfaceFlags::from_bits_retain(des.get_u32()?);
    descriptor.clock_identity = des.get_unique_identifier()?;
    descriptor.priority1 = des.get_u8()?;
    descriptor.clock_class = des.get_u8()?;
    descriptor.offset_scaled_log_variance = des.get_u16()?;
    descriptor.clock_accuracy = des.get_u8()?;
    descriptor.priority2 = des.get_u8()?;
    descriptor.domain_number = des.get_u8()?;
    descriptor.log_sync_interval = des.get_u8()?;
    descriptor.log_announce_interval = des.get_u8()?;
    descriptor.log_pdelay_interval = des.get_u8()?;
    descriptor.port_number = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_AVB_INTERFACE_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("AVB_INTERFACE", des.remaining());
    }

    Ok(descriptor)
}

/// CLOCK_SOURCE descriptor response body (Clause 7.2.9).
pub fn deserialize_read_clock_source_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<ClockSourceDescriptor, ProtocolError> {
    let mut descriptor = ClockSourceDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_CLOCK_SOURCE_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    descriptor.clock_source_flags = ClockSourceFlags::from_bits_retain(des.get_u32()?);
    descriptor.clock_source_type = des.get_u16()?;
    descriptor.clock_source_identifier = des.get_unique_identifier()?;
    descriptor.clock_source_location_type = des.get_descriptor_type()?;
    descriptor.clock_source_location_index = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_CLOCK_SOURCE_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("CLOCK_SOURCE", des.remaining());
    }

    Ok(descriptor)
}

/// MEMORY_OBJECT descriptor response body (Clause 7.2.10).
pub fn deserialize_read_memory_object_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<MemoryObjectDescriptor, ProtocolError> {
    let mut descriptor = MemoryObjectDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_MEMORY_OBJECT_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    descriptor.memory_object_type = des.get_u16()?;
    descriptor.target_descriptor_type = des.get_descriptor_type()?;
    descriptor.target_descriptor_index = des.get_u16()?;
    descriptor.start_address = des.get_u64()?;
    descriptor.maximum_length = des.get_u64()?;
    descriptor.length = des.get_u64()?;

    debug_assert_eq!(des.position(), READ_MEMORY_OBJECT_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("MEMORY_OBJECT", des.remaining());
    }

    Ok(descriptor)
}

/// LOCALE descriptor response body (Clause 7.2.11).
pub fn deserialize_read_locale_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<LocaleDescriptor, ProtocolError> {
    let mut descriptor = LocaleDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_LOCALE_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.locale_id = des.get_fixed_string()?;
    descriptor.number_of_string_descriptors = des.get_u16()?;
    descriptor.base_string_descriptor_index = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_LOCALE_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("LOCALE", des.remaining());
    }

    Ok(descriptor)
}

/// STRINGS descriptor response body (Clause 7.2.12).
pub fn deserialize_read_strings_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<StringsDescriptor, ProtocolError> {
    let mut descriptor = StringsDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_STRINGS_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    for string in descriptor.strings.iter_mut() {
        *string = des.get_fixed_string()?;
    }

    debug_assert_eq!(des.position(), READ_STRINGS_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("STRINGS", des.remaining());
    }

    Ok(descriptor)
}

/// STREAM_PORT_INPUT / STREAM_PORT_OUTPUT descriptor response body
/// (Clause 7.2.13).
pub fn deserialize_read_stream_port_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<StreamPortDescriptor, ProtocolError> {
    let mut descriptor = StreamPortDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_STREAM_PORT_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.clock_domain_index = des.get_u16()?;
    descriptor.port_flags = PortFlags::from_bits_retain(des.get_u32()?);
    descriptor.number_of_controls = des.get_u16()?;
    descriptor.base_control = des.get_u16()?;
    descriptor.number_of_clusters = des.get_u16()?;
    descriptor.base_cluster = des.get_u16()?;
    descriptor.number_of_maps = des.get_u16()?;
    descriptor.base_map = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_STREAM_PORT_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("STREAM_PORT", des.remaining());
    }

    Ok(descriptor)
}

/// EXTERNAL_PORT_INPUT / EXTERNAL_PORT_OUTPUT descriptor response body
/// (Clause 7.2.14).
pub fn deserialize_read_external_port_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<ExternalPortDescriptor, ProtocolError> {
    let mut descriptor = ExternalPortDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_EXTERNAL_PORT_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.clock_domain_index = des.get_u16()?;
    descriptor.port_flags = PortFlags::from_bits_retain(des.get_u32()?);
    descriptor.number_of_controls = des.get_u16()?;
    descriptor.base_control = des.get_u16()?;
    descriptor.signal_type = des.get_descriptor_type()?;
    descriptor.signal_index = des.get_u16()?;
    descriptor.signal_output = des.get_u16()?;
    descriptor.block_latency = des.get_u32()?;
    descriptor.jack_index = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_EXTERNAL_PORT_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("EXTERNAL_PORT", des.remaining());
    }

    Ok(descriptor)
}

/// INTERNAL_PORT_INPUT / INTERNAL_PORT_OUTPUT descriptor response body
/// (Clause 7.2.15).
pub fn deserialize_read_internal_port_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<InternalPortDescriptor, ProtocolError> {
    let mut descriptor = InternalPortDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_INTERNAL_PORT_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.clock_domain_index = des.get_u16()?;
    descriptor.port_flags = PortFlags::from_bits_retain(des.get_u32()?);
    descriptor.number_of_controls = des.get_u16()?;
    descriptor.base_control = des.get_u16()?;
    descriptor.signal_type = des.get_descriptor_type()?;
    descriptor.signal_index = des.get_u16()?;
    descriptor.signal_output = des.get_u16()?;
    descriptor.block_latency = des.get_u32()?;
    descriptor.internal_index = des.get_u16()?;

    debug_assert_eq!(des.position(), READ_INTERNAL_PORT_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("INTERNAL_PORT", des.remaining());
    }

    Ok(descriptor)
}

/// AUDIO_CLUSTER descriptor response body (Clause 7.2.16).
pub fn deserialize_read_audio_cluster_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<AudioClusterDescriptor, ProtocolError> {
    let mut descriptor = AudioClusterDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_AUDIO_CLUSTER_DESCRIPTOR_RESPONSE_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    descriptor.signal_type = des.get_descriptor_type()?;
    descriptor.signal_index = des.get_u16()?;
    descriptor.signal_output = des.get_u16()?;
    descriptor.path_latency = des.get_u32()?;
    descriptor.block_latency = des.get_u32()?;
    descriptor.channel_count = des.get_u16()?;
    descriptor.format = des.get_u8()?;

    debug_assert_eq!(des.position(), READ_AUDIO_CLUSTER_DESCRIPTOR_RESPONSE_SIZE);
    if des.remaining() != 0 {
        trace.trailing_bytes("AUDIO_CLUSTER", des.remaining());
    }

    Ok(descriptor)
}

/// AUDIO_MAP descriptor response body (Clause 7.2.19).
pub fn deserialize_read_audio_map_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<AudioMapDescriptor, ProtocolError> {
    let mut descriptor = AudioMapDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_AUDIO_MAP_DESCRIPTOR_RESPONSE_MIN_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    let mappings_offset = des.get_u16()?;
    let mappings_count = des.get_u16()? as usize;

    debug_assert_eq!(des.position(), READ_AUDIO_MAP_DESCRIPTOR_RESPONSE_MIN_SIZE);
    seek_descriptor_tail(&mut des, mappings_offset, AUDIO_MAPPING_SIZE * mappings_count)?;

    for _ in 0..mappings_count {
        descriptor.mappings.push(AudioMapping {
            stream_index: des.get_u16()?,
            stream_channel: des.get_u16()?,
            cluster_offset: des.get_u16()?,
            cluster_channel: des.get_u16()?,
        });
    }

    if des.remaining() != 0 {
        trace.trailing_bytes("AUDIO_MAP", des.remaining());
    }

    Ok(descriptor)
}

/// CLOCK_DOMAIN descriptor response body (Clause 7.2.32).
pub fn deserialize_read_clock_domain_descriptor_response(
    payload: &[u8],
    common_len: usize,
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<ClockDomainDescriptor, ProtocolError> {
    let mut descriptor = ClockDomainDescriptor::default();

    if status != AecpStatus::Success {
        return Ok(descriptor);
    }

    ensure_len(payload, READ_CLOCK_DOMAIN_DESCRIPTOR_RESPONSE_MIN_SIZE)?;
    let mut des = Reader::new(payload);
    des.set_position(common_len)?;

    descriptor.object_name = des.get_fixed_string()?;
    descriptor.localized_description = des.get_u16()?;
    descriptor.clock_source_index = des.get_u16()?;
    let sources_offset = des.get_u16()?;
    let sources_count = des.get_u16()? as usize;

    debug_assert_eq!(des.position(), READ_CLOCK_DOMAIN_DESCRIPTOR_RESPONSE_MIN_SIZE);
    seek_descriptor_tail(&mut des, sources_offset, 2 * sources_count)?;

    for _ in 0..sources_count {
        descriptor.clock_sources.push(des.get_u16()?);
    }

    if des.remaining() != 0 {
        trace.trailing_bytes("CLOCK_DOMAIN", des.remaining());
    }

    Ok(descriptor)
}

/// A decoded READ_DESCRIPTOR response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Entity(EntityDescriptor),
    Configuration(ConfigurationDescriptor),
    AudioUnit(AudioUnitDescriptor),
    Stream(StreamDescriptor),
    Jack(JackDescriptor),
    AvbInterface(AvbInterfaceDescriptor),
    ClockSource(ClockSourceDescriptor),
    MemoryObject(MemoryObjectDescriptor),
    Locale(LocaleDescriptor),
    Strings(StringsDescriptor),
    StreamPort(StreamPortDescriptor),
    ExternalPort(ExternalPortDescriptor),
    InternalPort(InternalPortDescriptor),
    AudioCluster(AudioClusterDescriptor),
    AudioMap(AudioMapDescriptor),
    ClockDomain(ClockDomainDescriptor),
}

/// Decode a full READ_DESCRIPTOR response, selecting the body decoder from
/// the descriptor type in the common header.
///
/// A descriptor type with no decoder in this family (including `Invalid`
/// and values outside the defined table) fails with
/// [`ProtocolError::UnknownValue`].
pub fn deserialize_read_descriptor_response(
    payload: &[u8],
    status: AecpStatus,
    trace: &dyn TraceSink,
) -> Result<(ReadDescriptorCommonResponse, Descriptor), ProtocolError> {
    let common = deserialize_read_descriptor_common_response(payload)?;
    let len = common.header_len;

    let descriptor = match common.descriptor_type {
        DescriptorType::Entity => Descriptor::Entity(
            deserialize_read_entity_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::Configuration => Descriptor::Configuration(
            deserialize_read_configuration_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::AudioUnit => Descriptor::AudioUnit(
            deserialize_read_audio_unit_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::StreamInput | DescriptorType::StreamOutput => Descriptor::Stream(
            deserialize_read_stream_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::JackInput | DescriptorType::JackOutput => Descriptor::Jack(
            deserialize_read_jack_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::AvbInterface => Descriptor::AvbInterface(
            deserialize_read_avb_interface_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::ClockSource => Descriptor::ClockSource(
            deserialize_read_clock_source_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::MemoryObject => Descriptor::MemoryObject(
            deserialize_read_memory_object_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::Locale => Descriptor::Locale(
            deserialize_read_locale_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::Strings => Descriptor::Strings(
            deserialize_read_strings_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::StreamPortInput | DescriptorType::StreamPortOutput => {
            Descriptor::StreamPort(deserialize_read_stream_port_descriptor_response(
                payload, len, status, trace,
            )?)
        }
        DescriptorType::ExternalPortInput | DescriptorType::ExternalPortOutput => {
            Descriptor::ExternalPort(deserialize_read_external_port_descriptor_response(
                payload, len, status, trace,
            )?)
        }
        DescriptorType::InternalPortInput | DescriptorType::InternalPortOutput => {
            Descriptor::InternalPort(deserialize_read_internal_port_descriptor_response(
                payload, len, status, trace,
            )?)
        }
        DescriptorType::AudioCluster => Descriptor::AudioCluster(
            deserialize_read_audio_cluster_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::AudioMap => Descriptor::AudioMap(
            deserialize_read_audio_map_descriptor_response(payload, len, status, trace)?,
        ),
        DescriptorType::ClockDomain => Descriptor::ClockDomain(
            deserialize_read_clock_domain_descriptor_response(payload, len, status, trace)?,
        ),
        other => {
            return Err(ProtocolError::UnknownValue {
                field: "descriptor_type",
                value: u16::from(other) as u32,
            })
        }
    };

    Ok((common, descriptor))
}
