//! Fixed-layout AEM command and response payload codecs.
//!
//! One `(serialize, deserialize)` pair per direction of each command in
//! Clause 7.4. Where the standard defines a response layout as identical to
//! its command, the response functions forward to the command functions; the
//! size constants backing both are compile-time asserted equal in
//! [`crate::constants`], and the forwarder's return type would stop
//! compiling if they diverged.
//!
//! Decoders return named-field structs rather than tuples so call sites
//! read without positional guesswork.

use avdecc_model::{
    AcquireEntityFlags, AvdeccFixedString, ClockSourceIndex, ConfigurationIndex, DescriptorIndex,
    DescriptorType, LockEntityFlags, SamplingRate, StreamFormat, StreamInfo, StreamInfoFlags,
    UniqueIdentifier,
};

use crate::buffer::{Reader, Writer};
use crate::constants::*;
use crate::ensure_len;
use crate::error::ProtocolError;

/// ACQUIRE_ENTITY command/response fields (Clause 7.4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AcquireEntity {
    pub flags: AcquireEntityFlags,
    pub owner_id: UniqueIdentifier,
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
}

/// LOCK_ENTITY command/response fields (Clause 7.4.2.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEntity {
    pub flags: LockEntityFlags,
    pub locked_id: UniqueIdentifier,
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
}

/// READ_DESCRIPTOR command fields (Clause 7.4.5.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadDescriptorCommand {
    pub configuration_index: ConfigurationIndex,
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
}

/// The `{descriptor_type, descriptor_index}` pair carried alone by several
/// commands (GET_STREAM_FORMAT, GET_STREAM_INFO, GET_SAMPLING_RATE,
/// GET_CLOCK_SOURCE, START_STREAMING, STOP_STREAMING).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DescriptorSelector {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
}

/// SET_STREAM_FORMAT command/response and GET_STREAM_FORMAT response fields
/// (Clauses 7.4.9, 7.4.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamFormatPayload {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub stream_format: StreamFormat,
}

/// SET_STREAM_INFO command/response and GET_STREAM_INFO response fields
/// (Clauses 7.4.15, 7.4.16).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamInfoPayload {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub info: StreamInfo,
}

/// SET_NAME command/response and GET_NAME response fields (Clauses 7.4.17,
/// 7.4.18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NamePayload {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub name_index: u16,
    pub configuration_index: ConfigurationIndex,
    pub name: AvdeccFixedString,
}

/// GET_NAME command fields (Clause 7.4.18.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetNameCommand {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub name_index: u16,
    pub configuration_index: ConfigurationIndex,
}

/// SET_SAMPLING_RATE command/response and GET_SAMPLING_RATE response fields
/// (Clauses 7.4.21, 7.4.22).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SamplingRatePayload {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub sampling_rate: SamplingRate,
}

/// SET_CLOCK_SOURCE command/response and GET_CLOCK_SOURCE response fields
/// (Clauses 7.4.23, 7.4.24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockSourcePayload {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub clock_source_index: ClockSourceIndex,
}

// --- ACQUIRE_ENTITY ----------------------------------------------------------

/// ACQUIRE_ENTITY command (Clause 7.4.1.1).
pub fn serialize_acquire_entity_command(
    cmd: &AcquireEntity,
) -> Result<Writer<ACQUIRE_ENTITY_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_u32(cmd.flags.bits())?;
    ser.put_unique_identifier(cmd.owner_id)?;
    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_acquire_entity_command(payload: &[u8]) -> Result<AcquireEntity, ProtocolError> {
    ensure_len(payload, ACQUIRE_ENTITY_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let flags = AcquireEntityFlags::from_bits_retain(des.get_u32()?);
    let owner_id = des.get_unique_identifier()?;
    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    Ok(AcquireEntity {
        flags,
        owner_id,
        descriptor_type,
        descriptor_index,
    })
}

/// ACQUIRE_ENTITY response: same layout as the command.
pub fn serialize_acquire_entity_response(
    resp: &AcquireEntity,
) -> Result<Writer<ACQUIRE_ENTITY_RESPONSE_SIZE>, ProtocolError> {
    serialize_acquire_entity_command(resp)
}

pub fn deserialize_acquire_entity_response(payload: &[u8]) -> Result<AcquireEntity, ProtocolError> {
    deserialize_acquire_entity_command(payload)
}

// --- LOCK_ENTITY -------------------------------------------------------------

/// LOCK_ENTITY command (Clause 7.4.2.1).
pub fn serialize_lock_entity_command(
    cmd: &LockEntity,
) -> Result<Writer<LOCK_ENTITY_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_u32(cmd.flags.bits())?;
    ser.put_unique_identifier(cmd.locked_id)?;
    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_lock_entity_command(payload: &[u8]) -> Result<LockEntity, ProtocolError> {
    ensure_len(payload, LOCK_ENTITY_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let flags = LockEntityFlags::from_bits_retain(des.get_u32()?);
    let locked_id = des.get_unique_identifier()?;
    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    Ok(LockEntity {
        flags,
        locked_id,
        descriptor_type,
        descriptor_index,
    })
}

/// LOCK_ENTITY response: same layout as the command.
pub fn serialize_lock_entity_response(
    resp: &LockEntity,
) -> Result<Writer<LOCK_ENTITY_RESPONSE_SIZE>, ProtocolError> {
    serialize_lock_entity_command(resp)
}

pub fn deserialize_lock_entity_response(payload: &[u8]) -> Result<LockEntity, ProtocolError> {
    deserialize_lock_entity_command(payload)
}

// --- ENTITY_AVAILABLE / CONTROLLER_AVAILABLE ---------------------------------

/// ENTITY_AVAILABLE carries no payload in either direction (Clause 7.4.3).
pub fn serialize_entity_available() -> Writer<ENTITY_AVAILABLE_COMMAND_SIZE> {
    Writer::new()
}

/// CONTROLLER_AVAILABLE carries no payload in either direction
/// (Clause 7.4.4).
pub fn serialize_controller_available() -> Writer<CONTROLLER_AVAILABLE_COMMAND_SIZE> {
    Writer::new()
}

// --- READ_DESCRIPTOR command -------------------------------------------------

/// READ_DESCRIPTOR command (Clause 7.4.5.1).
pub fn serialize_read_descriptor_command(
    cmd: &ReadDescriptorCommand,
) -> Result<Writer<READ_DESCRIPTOR_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();
    let reserved = 0u16;

    ser.put_u16(cmd.configuration_index)?;
    ser.put_u16(reserved)?;
    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_read_descriptor_command(
    payload: &[u8],
) -> Result<ReadDescriptorCommand, ProtocolError> {
    ensure_len(payload, READ_DESCRIPTOR_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let configuration_index = des.get_u16()?;
    let _reserved = des.get_u16()?;
    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    Ok(ReadDescriptorCommand {
        configuration_index,
        descriptor_type,
        descriptor_index,
    })
}

// --- SET_CONFIGURATION / GET_CONFIGURATION -----------------------------------

/// SET_CONFIGURATION command (Clause 7.4.7.1).
pub fn serialize_set_configuration_command(
    configuration_index: ConfigurationIndex,
) -> Result<Writer<SET_CONFIGURATION_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();
    let reserved = 0u16;

    ser.put_u16(reserved)?;
    ser.put_u16(configuration_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_set_configuration_command(
    payload: &[u8],
) -> Result<ConfigurationIndex, ProtocolError> {
    ensure_len(payload, SET_CONFIGURATION_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let _reserved = des.get_u16()?;
    let configuration_index = des.get_u16()?;

    Ok(configuration_index)
}

/// SET_CONFIGURATION response: same layout as the command.
pub fn serialize_set_configuration_response(
    configuration_index: ConfigurationIndex,
) -> Result<Writer<SET_CONFIGURATION_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_configuration_command(configuration_index)
}

pub fn deserialize_set_configuration_response(
    payload: &[u8],
) -> Result<ConfigurationIndex, ProtocolError> {
    deserialize_set_configuration_command(payload)
}

/// GET_CONFIGURATION command carries no payload (Clause 7.4.8.1).
pub fn serialize_get_configuration_command() -> Writer<GET_CONFIGURATION_COMMAND_SIZE> {
    Writer::new()
}

/// GET_CONFIGURATION response: same layout as the SET_CONFIGURATION command.
pub fn serialize_get_configuration_response(
    configuration_index: ConfigurationIndex,
) -> Result<Writer<GET_CONFIGURATION_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_configuration_command(configuration_index)
}

pub fn deserialize_get_configuration_response(
    payload: &[u8],
) -> Result<ConfigurationIndex, ProtocolError> {
    deserialize_set_configuration_command(payload)
}

// --- SET_STREAM_FORMAT / GET_STREAM_FORMAT -----------------------------------

/// SET_STREAM_FORMAT command (Clause 7.4.9.1).
pub fn serialize_set_stream_format_command(
    cmd: &StreamFormatPayload,
) -> Result<Writer<SET_STREAM_FORMAT_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;
    ser.put_stream_format(cmd.stream_format)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_set_stream_format_command(
    payload: &[u8],
) -> Result<StreamFormatPayload, ProtocolError> {
    ensure_len(payload, SET_STREAM_FORMAT_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let stream_format = des.get_stream_format()?;

    Ok(StreamFormatPayload {
        descriptor_type,
        descriptor_index,
        stream_format,
    })
}

/// SET_STREAM_FORMAT response: same layout as the command.
pub fn serialize_set_stream_format_response(
    resp: &StreamFormatPayload,
) -> Result<Writer<SET_STREAM_FORMAT_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_stream_format_command(resp)
}

pub fn deserialize_set_stream_format_response(
    payload: &[u8],
) -> Result<StreamFormatPayload, ProtocolError> {
    deserialize_set_stream_format_command(payload)
}

/// GET_STREAM_FORMAT command (Clause 7.4.10.1).
pub fn serialize_get_stream_format_command(
    cmd: &DescriptorSelector,
) -> Result<Writer<GET_STREAM_FORMAT_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_get_stream_format_command(
    payload: &[u8],
) -> Result<DescriptorSelector, ProtocolError> {
    ensure_len(payload, GET_STREAM_FORMAT_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    Ok(DescriptorSelector {
        descriptor_type,
        descriptor_index,
    })
}

/// GET_STREAM_FORMAT response: same layout as the SET_STREAM_FORMAT command.
pub fn serialize_get_stream_format_response(
    resp: &StreamFormatPayload,
) -> Result<Writer<GET_STREAM_FORMAT_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_stream_format_command(resp)
}

pub fn deserialize_get_stream_format_response(
    payload: &[u8],
) -> Result<StreamFormatPayload, ProtocolError> {
    deserialize_set_stream_format_command(payload)
}

// --- SET_STREAM_INFO / GET_STREAM_INFO ---------------------------------------

/// SET_STREAM_INFO command (Clause 7.4.15.1).
pub fn serialize_set_stream_info_command(
    cmd: &StreamInfoPayload,
) -> Result<Writer<SET_STREAM_INFO_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();
    let reserved = 0u8;
    let reserved2 = 0u16;

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;
    ser.put_u32(cmd.info.stream_info_flags.bits())?;
    ser.put_stream_format(cmd.info.stream_format)?;
    ser.put_unique_identifier(cmd.info.stream_id)?;
    ser.put_u32(cmd.info.msrp_accumulated_latency)?;
    ser.put_mac_address(&cmd.info.stream_dest_mac)?;
    ser.put_u8(cmd.info.msrp_failure_code)?;
    ser.put_u8(reserved)?;
    ser.put_u64(cmd.info.msrp_failure_bridge_id)?;
    ser.put_u16(cmd.info.stream_vlan_id)?;
    ser.put_u16(reserved2)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_set_stream_info_command(
    payload: &[u8],
) -> Result<StreamInfoPayload, ProtocolError> {
    ensure_len(payload, SET_STREAM_INFO_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let stream_info_flags = StreamInfoFlags::from_bits_retain(des.get_u32()?);
    let stream_format = des.get_stream_format()?;
    let stream_id = des.get_unique_identifier()?;
    let msrp_accumulated_latency = des.get_u32()?;
    let stream_dest_mac = des.get_mac_address()?;
    let msrp_failure_code = des.get_u8()?;
    let _reserved = des.get_u8()?;
    let msrp_failure_bridge_id = des.get_u64()?;
    let stream_vlan_id = des.get_u16()?;
    let _reserved2 = des.get_u16()?;

    Ok(StreamInfoPayload {
        descriptor_type,
        descriptor_index,
        info: StreamInfo {
            stream_info_flags,
            stream_format,
            stream_id,
            msrp_accumulated_latency,
            stream_dest_mac,
            msrp_failure_code,
            msrp_failure_bridge_id,
            stream_vlan_id,
        },
    })
}

/// SET_STREAM_INFO response: same layout as the command.
pub fn serialize_set_stream_info_response(
    resp: &StreamInfoPayload,
) -> Result<Writer<SET_STREAM_INFO_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_stream_info_command(resp)
}

pub fn deserialize_set_stream_info_response(
    payload: &[u8],
) -> Result<StreamInfoPayload, ProtocolError> {
    deserialize_set_stream_info_command(payload)
}

/// GET_STREAM_INFO command (Clause 7.4.16.1).
pub fn serialize_get_stream_info_command(
    cmd: &DescriptorSelector,
) -> Result<Writer<GET_STREAM_INFO_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_get_stream_info_command(
    payload: &[u8],
) -> Result<DescriptorSelector, ProtocolError> {
    ensure_len(payload, GET_STREAM_INFO_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    Ok(DescriptorSelector {
        descriptor_type,
        descriptor_index,
    })
}

/// GET_STREAM_INFO response: same layout as the SET_STREAM_INFO command.
pub fn serialize_get_stream_info_response(
    resp: &StreamInfoPayload,
) -> Result<Writer<GET_STREAM_INFO_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_stream_info_command(resp)
}

pub fn deserialize_get_stream_info_response(
    payload: &[u8],
) -> Result<StreamInfoPayload, ProtocolError> {
    deserialize_set_stream_info_command(payload)
}

// --- SET_NAME / GET_NAME -----------------------------------------------------

/// SET_NAME command (Clause 7.4.17.1).
pub fn serialize_set_name_command(
    cmd: &NamePayload,
) -> Result<Writer<SET_NAME_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;
    ser.put_u16(cmd.name_index)?;
    ser.put_u16(cmd.configuration_index)?;
    ser.put_fixed_string(&cmd.name)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_set_name_command(payload: &[u8]) -> Result<NamePayload, ProtocolError> {
    ensure_len(payload, SET_NAME_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let name_index = des.get_u16()?;
    let configuration_index = des.get_u16()?;
    let name = des.get_fixed_string()?;

    Ok(NamePayload {
        descriptor_type,
        descriptor_index,
        name_index,
        configuration_index,
        name,
    })
}

/// SET_NAME response: same layout as the command.
pub fn serialize_set_name_response(
    resp: &NamePayload,
) -> Result<Writer<SET_NAME_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_name_command(resp)
}

pub fn deserialize_set_name_response(payload: &[u8]) -> Result<NamePayload, ProtocolError> {
    deserialize_set_name_command(payload)
}

/// GET_NAME command (Clause 7.4.18.1).
pub fn serialize_get_name_command(
    cmd: &GetNameCommand,
) -> Result<Writer<GET_NAME_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;
    ser.put_u16(cmd.name_index)?;
    ser.put_u16(cmd.configuration_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_get_name_command(payload: &[u8]) -> Result<GetNameCommand, ProtocolError> {
    ensure_len(payload, GET_NAME_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let name_index = des.get_u16()?;
    let configuration_index = des.get_u16()?;

    Ok(GetNameCommand {
        descriptor_type,
        descriptor_index,
        name_index,
        configuration_index,
    })
}

/// GET_NAME response: same layout as the SET_NAME command.
pub fn serialize_get_name_response(
    resp: &NamePayload,
) -> Result<Writer<GET_NAME_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_name_command(resp)
}

pub fn deserialize_get_name_response(payload: &[u8]) -> Result<NamePayload, ProtocolError> {
    deserialize_set_name_command(payload)
}

// --- SET_SAMPLING_RATE / GET_SAMPLING_RATE -----------------------------------

/// SET_SAMPLING_RATE command (Clause 7.4.21.1).
pub fn serialize_set_sampling_rate_command(
    cmd: &SamplingRatePayload,
) -> Result<Writer<SET_SAMPLING_RATE_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;
    ser.put_sampling_rate(cmd.sampling_rate)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_set_sampling_rate_command(
    payload: &[u8],
) -> Result<SamplingRatePayload, ProtocolError> {
    ensure_len(payload, SET_SAMPLING_RATE_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let sampling_rate = des.get_sampling_rate()?;

    Ok(SamplingRatePayload {
        descriptor_type,
        descriptor_index,
        sampling_rate,
    })
}

/// SET_SAMPLING_RATE response: same layout as the command.
pub fn serialize_set_sampling_rate_response(
    resp: &SamplingRatePayload,
) -> Result<Writer<SET_SAMPLING_RATE_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_sampling_rate_command(resp)
}

pub fn deserialize_set_sampling_rate_response(
    payload: &[u8],
) -> Result<SamplingRatePayload, ProtocolError> {
    deserialize_set_sampling_rate_command(payload)
}

/// GET_SAMPLING_RATE command (Clause 7.4.22.1).
pub fn serialize_get_sampling_rate_command(
    cmd: &DescriptorSelector,
) -> Result<Writer<GET_SAMPLING_RATE_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_get_sampling_rate_command(
    payload: &[u8],
) -> Result<DescriptorSelector, ProtocolError> {
    ensure_len(payload, GET_SAMPLING_RATE_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    Ok(DescriptorSelector {
        descriptor_type,
        descriptor_index,
    })
}

/// GET_SAMPLING_RATE response: same layout as the SET_SAMPLING_RATE command.
pub fn serialize_get_sampling_rate_response(
    resp: &SamplingRatePayload,
) -> Result<Writer<GET_SAMPLING_RATE_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_sampling_rate_command(resp)
}

pub fn deserialize_get_sampling_rate_response(
    payload: &[u8],
) -> Result<SamplingRatePayload, ProtocolError> {
    deserialize_set_sampling_rate_command(payload)
}

// --- SET_CLOCK_SOURCE / GET_CLOCK_SOURCE -------------------------------------

/// SET_CLOCK_SOURCE command (Clause 7.4.23.1).
pub fn serialize_set_clock_source_command(
    cmd: &ClockSourcePayload,
) -> Result<Writer<SET_CLOCK_SOURCE_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();
    let reserved = 0u16;

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;
    ser.put_u16(cmd.clock_source_index)?;
    ser.put_u16(reserved)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_set_clock_source_command(
    payload: &[u8],
) -> Result<ClockSourcePayload, ProtocolError> {
    ensure_len(payload, SET_CLOCK_SOURCE_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let clock_source_index = des.get_u16()?;
    let _reserved = des.get_u16()?;

    Ok(ClockSourcePayload {
        descriptor_type,
        descriptor_index,
        clock_source_index,
    })
}

/// SET_CLOCK_SOURCE response: same layout as the command.
pub fn serialize_set_clock_source_response(
    resp: &ClockSourcePayload,
) -> Result<Writer<SET_CLOCK_SOURCE_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_clock_source_command(resp)
}

pub fn deserialize_set_clock_source_response(
    payload: &[u8],
) -> Result<ClockSourcePayload, ProtocolError> {
    deserialize_set_clock_source_command(payload)
}

/// GET_CLOCK_SOURCE command (Clause 7.4.24.1).
pub fn serialize_get_clock_source_command(
    cmd: &DescriptorSelector,
) -> Result<Writer<GET_CLOCK_SOURCE_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_get_clock_source_command(
    payload: &[u8],
) -> Result<DescriptorSelector, ProtocolError> {
    ensure_len(payload, GET_CLOCK_SOURCE_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    Ok(DescriptorSelector {
        descriptor_type,
        descriptor_index,
    })
}

/// GET_CLOCK_SOURCE response: same layout as the SET_CLOCK_SOURCE command.
pub fn serialize_get_clock_source_response(
    resp: &ClockSourcePayload,
) -> Result<Writer<GET_CLOCK_SOURCE_RESPONSE_SIZE>, ProtocolError> {
    serialize_set_clock_source_command(resp)
}

pub fn deserialize_get_clock_source_response(
    payload: &[u8],
) -> Result<ClockSourcePayload, ProtocolError> {
    deserialize_set_clock_source_command(payload)
}

// --- START_STREAMING / STOP_STREAMING ----------------------------------------

/// START_STREAMING command (Clause 7.4.35.1).
pub fn serialize_start_streaming_command(
    cmd: &DescriptorSelector,
) -> Result<Writer<START_STREAMING_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_start_streaming_command(
    payload: &[u8],
) -> Result<DescriptorSelector, ProtocolError> {
    ensure_len(payload, START_STREAMING_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;

    Ok(DescriptorSelector {
        descriptor_type,
        descriptor_index,
    })
}

/// START_STREAMING response: same layout as the command.
pub fn serialize_start_streaming_response(
    resp: &DescriptorSelector,
) -> Result<Writer<START_STREAMING_RESPONSE_SIZE>, ProtocolError> {
    serialize_start_streaming_command(resp)
}

pub fn deserialize_start_streaming_response(
    payload: &[u8],
) -> Result<DescriptorSelector, ProtocolError> {
    deserialize_start_streaming_command(payload)
}

/// STOP_STREAMING command: same layout as the START_STREAMING command
/// (Clause 7.4.36.1).
pub fn serialize_stop_streaming_command(
    cmd: &DescriptorSelector,
) -> Result<Writer<STOP_STREAMING_COMMAND_SIZE>, ProtocolError> {
    serialize_start_streaming_command(cmd)
}

pub fn deserialize_stop_streaming_command(
    payload: &[u8],
) -> Result<DescriptorSelector, ProtocolError> {
    deserialize_start_streaming_command(payload)
}

/// STOP_STREAMING response: same layout as the START_STREAMING command.
pub fn serialize_stop_streaming_response(
    resp: &DescriptorSelector,
) -> Result<Writer<STOP_STREAMING_RESPONSE_SIZE>, ProtocolError> {
    serialize_start_streaming_command(resp)
}

pub fn deserialize_stop_streaming_response(
    payload: &[u8],
) -> Result<DescriptorSelector, ProtocolError> {
    deserialize_start_streaming_command(payload)
}
