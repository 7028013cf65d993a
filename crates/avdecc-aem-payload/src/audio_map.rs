//! GET_AUDIO_MAP / ADD_AUDIO_MAPPINGS / REMOVE_AUDIO_MAPPINGS codecs.
//!
//! The three messages share one variable layout: a short fixed header
//! followed by `number_of_mappings` eight-byte mapping records. One core
//! encode and one core decode serve all of them; ADD and REMOVE differ from
//! GET_AUDIO_MAP only by the absence of the `map_index`/`number_of_maps`
//! pair.

use avdecc_model::{AudioMapping, DescriptorIndex, DescriptorType, MapIndex};

use crate::buffer::{Reader, Writer};
use crate::constants::*;
use crate::ensure_len;
use crate::error::ProtocolError;
use crate::trace::TraceSink;

/// GET_AUDIO_MAP command fields (Clause 7.4.44.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetAudioMapCommand {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub map_index: MapIndex,
}

/// GET_AUDIO_MAP response fields (Clause 7.4.44.2).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetAudioMapResponse {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub map_index: MapIndex,
    pub number_of_maps: MapIndex,
    pub mappings: Vec<AudioMapping>,
}

/// ADD_AUDIO_MAPPINGS / REMOVE_AUDIO_MAPPINGS fields (Clauses 7.4.45,
/// 7.4.46).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AudioMappingsPayload {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    pub mappings: Vec<AudioMapping>,
}

fn put_mappings<const CAP: usize>(
    ser: &mut Writer<CAP>,
    mappings: &[AudioMapping],
) -> Result<(), ProtocolError> {
    for mapping in mappings {
        ser.put_u16(mapping.stream_index)?;
        ser.put_u16(mapping.stream_channel)?;
        ser.put_u16(mapping.cluster_offset)?;
        ser.put_u16(mapping.cluster_channel)?;
    }
    Ok(())
}

fn get_mappings(des: &mut Reader<'_>, count: usize) -> Result<Vec<AudioMapping>, ProtocolError> {
    let needed = AUDIO_MAPPING_SIZE * count;
    if des.remaining() < needed {
        return Err(ProtocolError::TruncatedPayload {
            needed,
            available: des.remaining(),
        });
    }
    let mut mappings = Vec::with_capacity(count);
    for _ in 0..count {
        mappings.push(AudioMapping {
            stream_index: des.get_u16()?,
            stream_channel: des.get_u16()?,
            cluster_offset: des.get_u16()?,
            cluster_channel: des.get_u16()?,
        });
    }
    Ok(mappings)
}

// --- GET_AUDIO_MAP -----------------------------------------------------------

/// GET_AUDIO_MAP command (Clause 7.4.44.1).
pub fn serialize_get_audio_map_command(
    cmd: &GetAudioMapCommand,
) -> Result<Writer<GET_AUDIO_MAP_COMMAND_SIZE>, ProtocolError> {
    let mut ser = Writer::new();
    let reserved = 0u16;

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;
    ser.put_u16(cmd.map_index)?;
    ser.put_u16(reserved)?;

    debug_assert_eq!(ser.bytes_written(), ser.capacity());
    Ok(ser)
}

pub fn deserialize_get_audio_map_command(
    payload: &[u8],
) -> Result<GetAudioMapCommand, ProtocolError> {
    ensure_len(payload, GET_AUDIO_MAP_COMMAND_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let map_index = des.get_u16()?;
    let _reserved = des.get_u16()?;

    Ok(GetAudioMapCommand {
        descriptor_type,
        descriptor_index,
        map_index,
    })
}

/// GET_AUDIO_MAP response (Clause 7.4.44.2).
///
/// Fails with [`ProtocolError::CapacityExceeded`] when the mappings do not
/// fit the maximum AEM payload.
pub fn serialize_get_audio_map_response(
    resp: &GetAudioMapResponse,
) -> Result<Writer<MAX_AEM_PAYLOAD_LENGTH>, ProtocolError> {
    let mut ser = Writer::new();
    let reserved = 0u16;

    ser.put_descriptor_type(resp.descriptor_type)?;
    ser.put_u16(resp.descriptor_index)?;
    ser.put_u16(resp.map_index)?;
    ser.put_u16(resp.number_of_maps)?;
    ser.put_u16(resp.mappings.len() as u16)?;
    ser.put_u16(reserved)?;
    put_mappings(&mut ser, &resp.mappings)?;

    Ok(ser)
}

pub fn deserialize_get_audio_map_response(
    payload: &[u8],
    trace: &dyn TraceSink,
) -> Result<GetAudioMapResponse, ProtocolError> {
    ensure_len(payload, GET_AUDIO_MAP_RESPONSE_MIN_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let map_index = des.get_u16()?;
    let number_of_maps = des.get_u16()?;
    let number_of_mappings = des.get_u16()?;
    let _reserved = des.get_u16()?;

    let mappings = get_mappings(&mut des, number_of_mappings as usize)?;

    if des.remaining() != 0 {
        trace.trailing_bytes("GET_AUDIO_MAP response", des.remaining());
    }

    Ok(GetAudioMapResponse {
        descriptor_type,
        descriptor_index,
        map_index,
        number_of_maps,
        mappings,
    })
}

// --- ADD_AUDIO_MAPPINGS / REMOVE_AUDIO_MAPPINGS ------------------------------

/// ADD_AUDIO_MAPPINGS command (Clause 7.4.45.1).
pub fn serialize_add_audio_mappings_command(
    cmd: &AudioMappingsPayload,
) -> Result<Writer<MAX_AEM_PAYLOAD_LENGTH>, ProtocolError> {
    let mut ser = Writer::new();
    let reserved = 0u16;

    ser.put_descriptor_type(cmd.descriptor_type)?;
    ser.put_u16(cmd.descriptor_index)?;
    ser.put_u16(cmd.mappings.len() as u16)?;
    ser.put_u16(reserved)?;
    put_mappings(&mut ser, &cmd.mappings)?;

    Ok(ser)
}

pub fn deserialize_add_audio_mappings_command(
    payload: &[u8],
    trace: &dyn TraceSink,
) -> Result<AudioMappingsPayload, ProtocolError> {
    ensure_len(payload, ADD_AUDIO_MAPPINGS_COMMAND_MIN_SIZE)?;
    let mut des = Reader::new(payload);

    let descriptor_type = des.get_descriptor_type()?;
    let descriptor_index = des.get_u16()?;
    let number_of_mappings = des.get_u16()?;
    let _reserved = des.get_u16()?;

    let mappings = get_mappings(&mut des, number_of_mappings as usize)?;

    if des.remaining() != 0 {
        trace.trailing_bytes("ADD/REMOVE_AUDIO_MAPPINGS", des.remaining());
    }

    Ok(AudioMappingsPayload {
        descriptor_type,
        descriptor_index,
        mappings,
    })
}

/// ADD_AUDIO_MAPPINGS response: same layout as the command.
pub fn serialize_add_audio_mappings_response(
    resp: &AudioMappingsPayload,
) -> Result<Writer<MAX_AEM_PAYLOAD_LENGTH>, ProtocolError> {
    serialize_add_audio_mappings_command(resp)
}

pub fn deserialize_add_audio_mappings_response(
    payload: &[u8],
    trace: &dyn TraceSink,
) -> Result<AudioMappingsPayload, ProtocolError> {
    deserialize_add_audio_mappings_command(payload, trace)
}

/// REMOVE_AUDIO_MAPPINGS command: same layout as the ADD_AUDIO_MAPPINGS
/// command (Clause 7.4.46.1).
pub fn serialize_remove_audio_mappings_command(
    cmd: &AudioMappingsPayload,
) -> Result<Writer<MAX_AEM_PAYLOAD_LENGTH>, ProtocolError> {
    serialize_add_audio_mappings_command(cmd)
}

pub fn deserialize_remove_audio_mappings_command(
    payload: &[u8],
    trace: &dyn TraceSink,
) -> Result<AudioMappingsPayload, ProtocolError> {
    deserialize_add_audio_mappings_command(payload, trace)
}

/// REMOVE_AUDIO_MAPPINGS response: same layout as the ADD_AUDIO_MAPPINGS
/// command.
pub fn serialize_remove_audio_mappings_response(
    resp: &AudioMappingsPayload,
) -> Result<Writer<MAX_AEM_PAYLOAD_LENGTH>, ProtocolError> {
    serialize_add_audio_mappings_command(resp)
}

pub fn deserialize_remove_audio_mappings_response(
    payload: &[u8],
    trace: &dyn TraceSink,
) -> Result<AudioMappingsPayload, ProtocolError> {
    deserialize_add_audio_mappings_command(payload, trace)
}
