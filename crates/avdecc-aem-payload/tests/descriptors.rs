//! READ_DESCRIPTOR response family: decode, status gating, offset
//! validation, truncation, and trailing-byte diagnostics.

use std::cell::RefCell;

use avdecc_aem_payload::constants::*;
use avdecc_aem_payload::*;
use avdecc_model::*;

/// Byte-buffer builder for hand-made response payloads.
struct Buf(Vec<u8>);

impl Buf {
    fn new() -> Self {
        Buf(Vec::new())
    }

    /// Common `{configuration_index, reserved, descriptor_type, index}`
    /// response header.
    fn common(configuration_index: u16, descriptor_type: DescriptorType, index: u16) -> Self {
        Buf::new()
            .u16(configuration_index)
            .u16(0)
            .u16(u16::from(descriptor_type))
            .u16(index)
    }

    fn u8(mut self, v: u8) -> Self {
        self.0.push(v);
        self
    }

    fn u16(mut self, v: u16) -> Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    fn u32(mut self, v: u32) -> Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    fn u64(mut self, v: u64) -> Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    fn bytes(mut self, v: &[u8]) -> Self {
        self.0.extend_from_slice(v);
        self
    }

    fn str64(self, s: &str) -> Self {
        let fixed = AvdeccFixedString::new(s);
        self.bytes(fixed.as_bytes())
    }

    fn build(self) -> Vec<u8> {
        self.0
    }
}

/// Sink that records every trailing-bytes report.
#[derive(Default)]
struct CapturingTrace(RefCell<Vec<(&'static str, usize)>>);

impl TraceSink for CapturingTrace {
    fn trailing_bytes(&self, context: &'static str, remaining: usize) {
        self.0.borrow_mut().push((context, remaining));
    }
}

#[test]
fn test_common_header_decode() {
    let payload = Buf::common(1, DescriptorType::StreamInput, 2).build();
    let common = deserialize_read_descriptor_common_response(&payload).unwrap();
    assert_eq!(common.header_len, READ_COMMON_DESCRIPTOR_RESPONSE_SIZE);
    assert_eq!(common.configuration_index, 1);
    assert_eq!(common.descriptor_type, DescriptorType::StreamInput);
    assert_eq!(common.descriptor_index, 2);

    let err = deserialize_read_descriptor_common_response(&payload[..7]).unwrap_err();
    assert!(matches!(err, ProtocolError::TruncatedPayload { .. }));
}

fn entity_payload() -> Vec<u8> {
    Buf::common(0, DescriptorType::Entity, 0)
        .u64(0x0011223344556677) // entity_id
        .u64(0x00112233AABBCC00) // vendor_entity_model_id
        .u32(0x0000C588) // entity_capabilities
        .u16(8) // talker_stream_sources
        .u16(0x4801) // talker_capabilities
        .u16(8) // listener_stream_sinks
        .u16(0x4801) // listener_capabilities
        .u32(0) // controller_capabilities
        .u32(42) // available_index
        .u64(u64::MAX) // association_id
        .str64("Stage box")
        .u16(0) // vendor_name_string
        .u16(1) // model_name_string
        .str64("1.2.3")
        .str64("Monitors")
        .str64("SN-0042")
        .u16(1) // configurations_count
        .u16(0) // current_configuration
        .build()
}

#[test]
fn test_entity_descriptor_decode() {
    let payload = entity_payload();
    assert_eq!(payload.len(), READ_ENTITY_DESCRIPTOR_RESPONSE_SIZE);

    let descriptor = deserialize_read_entity_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert_eq!(descriptor.entity_id, UniqueIdentifier::new(0x0011223344556677));
    assert_eq!(descriptor.talker_stream_sources, 8);
    assert!(descriptor.association_id.is_uninitialized());
    assert_eq!(descriptor.entity_name.to_string_lossy(), "Stage box");
    assert_eq!(descriptor.firmware_version.to_string_lossy(), "1.2.3");
    assert_eq!(descriptor.serial_number.to_string_lossy(), "SN-0042");
    assert_eq!(descriptor.configurations_count, 1);
}

#[test]
fn test_status_gate_skips_descriptor_body() {
    // On a non-success status only the 8 common bytes exist; the decoder
    // must not look past them and must hand back a default descriptor.
    let payload = Buf::common(0, DescriptorType::Entity, 0).build();
    let descriptor = deserialize_read_entity_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::NoSuchDescriptor,
        &DiscardTrace,
    )
    .unwrap();
    assert_eq!(descriptor, EntityDescriptor::default());

    let payload = Buf::common(0, DescriptorType::AudioUnit, 1).build();
    let descriptor = deserialize_read_audio_unit_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::EntityLocked,
        &DiscardTrace,
    )
    .unwrap();
    assert_eq!(descriptor, AudioUnitDescriptor::default());
}

fn configuration_payload(entries: &[(DescriptorType, u16)]) -> Vec<u8> {
    let mut buf = Buf::common(0, DescriptorType::Configuration, 0)
        .str64("Default")
        .u16(3) // localized_description
        .u16(entries.len() as u16)
        .u16(74); // counts immediately follow the fixed fields
    for &(descriptor_type, count) in entries {
        buf = buf.u16(u16::from(descriptor_type)).u16(count);
    }
    buf.build()
}

#[test]
fn test_configuration_descriptor_counts_are_keyed_not_ordered() {
    let entries = [
        (DescriptorType::AudioUnit, 1),
        (DescriptorType::StreamInput, 2),
        (DescriptorType::StreamOutput, 2),
    ];
    let mut reversed = entries;
    reversed.reverse();

    let a = deserialize_read_configuration_descriptor_response(
        &configuration_payload(&entries),
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();
    let b = deserialize_read_configuration_descriptor_response(
        &configuration_payload(&reversed),
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert_eq!(a, b);
    assert_eq!(a.descriptor_counts.len(), 3);
    assert_eq!(a.descriptor_counts[&DescriptorType::StreamInput], 2);
}

#[test]
fn test_configuration_descriptor_truncated_counts() {
    let payload = configuration_payload(&[
        (DescriptorType::AudioUnit, 1),
        (DescriptorType::StreamInput, 2),
    ]);
    // Chop into the second entry.
    let err = deserialize_read_configuration_descriptor_response(
        &payload[..payload.len() - 2],
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap_err();
    assert!(matches!(err, ProtocolError::TruncatedPayload { .. }));
}

fn audio_unit_payload(rates_offset: u16, rates: &[u32]) -> Vec<u8> {
    let mut buf = Buf::common(0, DescriptorType::AudioUnit, 0)
        .str64("Audio unit")
        .u16(2) // localized_description
        .u16(0); // clock_domain_index
    for pair in 0..16u16 {
        buf = buf.u16(1).u16(pair); // number_of_x / base_x
    }
    buf = buf
        .u32(48_000) // current_sampling_rate
        .u16(rates_offset)
        .u16(rates.len() as u16);
    for &rate in rates {
        buf = buf.u32(rate);
    }
    buf.build()
}

#[test]
fn test_audio_unit_sampling_rates_via_offset() {
    // 0x0090 from the descriptor base lands at buffer offset 0x0094, right
    // after the fixed region.
    let payload = audio_unit_payload(0x0090, &[44_100, 48_000]);
    assert_eq!(payload.len(), READ_AUDIO_UNIT_DESCRIPTOR_RESPONSE_MIN_SIZE + 8);

    let descriptor = deserialize_read_audio_unit_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert_eq!(descriptor.current_sampling_rate, SamplingRate::new(48_000));
    assert_eq!(descriptor.sampling_rates.len(), 2);
    assert!(descriptor.sampling_rates.contains(&SamplingRate::new(44_100)));
    assert!(descriptor.sampling_rates.contains(&SamplingRate::new(48_000)));
}

#[test]
fn test_audio_unit_offset_into_fixed_header_is_rejected() {
    let payload = audio_unit_payload(0x0000, &[44_100, 48_000]);
    let err = deserialize_read_audio_unit_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ProtocolError::BadOffset {
            offset: 4,
            valid_from: READ_AUDIO_UNIT_DESCRIPTOR_RESPONSE_MIN_SIZE,
            valid_to: payload.len(),
        }
    );
}

#[test]
fn test_audio_unit_offset_past_buffer_end_is_rejected() {
    let payload = audio_unit_payload(0x0200, &[44_100, 48_000]);
    let err = deserialize_read_audio_unit_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap_err();
    assert!(matches!(err, ProtocolError::BadOffset { offset: 0x0204, .. }));
}

#[test]
fn test_audio_unit_truncated_rate_tail() {
    let payload = audio_unit_payload(0x0090, &[44_100, 48_000]);
    // Drop the last rate: the declared count no longer fits.
    let err = deserialize_read_audio_unit_descriptor_response(
        &payload[..payload.len() - 4],
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ProtocolError::TruncatedPayload {
            needed: 8,
            available: 4
        }
    );
}

fn stream_payload(formats_offset: u16, formats: &[u64]) -> Vec<u8> {
    let mut buf = Buf::common(0, DescriptorType::StreamInput, 0)
        .str64("Input stream")
        .u16(4) // localized_description
        .u16(0) // clock_domain_index
        .u32(StreamFlags::CLASS_A.bits())
        .u64(0x00A0020240000800) // current_format
        .u16(formats_offset)
        .u16(formats.len() as u16)
        .u64(0) // backup_talker_entity_id_0
        .u16(0)
        .u64(0) // backup_talker_entity_id_1
        .u16(0)
        .u64(0) // backup_talker_entity_id_2
        .u16(0)
        .u64(0) // backedup_talker_entity_id
        .u16(0)
        .u16(0) // avb_interface_index
        .u32(583_333); // buffer_length
    for &format in formats {
        buf = buf.u64(format);
    }
    buf.build()
}

#[test]
fn test_stream_descriptor_formats_via_offset() {
    // The fixed region is 130 body bytes; 134 from the descriptor base is
    // the tightly packed tail position.
    let payload = stream_payload(134, &[0x00A0020240000800, 0x00A0020440000800]);
    assert_eq!(payload.len(), READ_STREAM_DESCRIPTOR_RESPONSE_MIN_SIZE + 16);

    let descriptor = deserialize_read_stream_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert_eq!(descriptor.current_format, StreamFormat::new(0x00A0020240000800));
    assert!(descriptor.stream_flags.contains(StreamFlags::CLASS_A));
    assert_eq!(descriptor.formats.len(), 2);
    assert_eq!(descriptor.buffer_length, 583_333);
}

#[test]
fn test_jack_descriptor_decode_and_trailing_bytes() {
    let payload = Buf::common(0, DescriptorType::JackOutput, 1)
        .str64("XLR out")
        .u16(5)
        .u32(JackFlags::CAPTIVE.bits())
        .u16(0x0007) // jack_type
        .u16(0)
        .u16(0)
        .bytes(&[0xDE, 0xAD, 0xBE]) // trailing garbage
        .build();

    let trace = CapturingTrace::default();
    let descriptor = deserialize_read_jack_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &trace,
    )
    .unwrap();

    assert!(descriptor.jack_flags.contains(JackFlags::CAPTIVE));
    assert_eq!(descriptor.jack_type, 0x0007);
    assert_eq!(trace.0.borrow().as_slice(), &[("JACK", 3)]);
}

#[test]
fn test_avb_interface_descriptor_decode() {
    let payload = Buf::common(0, DescriptorType::AvbInterface, 0)
        .str64("eth0")
        .u16(6)
        .bytes(&[0x00, 0x1B, 0x21, 0x00, 0x00, 0x01]) // mac_address
        .u32(AvbInterfaceFlags::GPTP_SUPPORTED.bits())
        .u64(0x001B21FFFE000001) // clock_identity
        .u8(248) // priority1
        .u8(248) // clock_class
        .u16(0x4100) // offset_scaled_log_variance
        .u8(0xFE) // clock_accuracy
        .u8(248) // priority2
        .u8(0) // domain_number
        .u8(0xFD) // log_sync_interval
        .u8(0) // log_announce_interval
        .u8(0) // log_pdelay_interval
        .u16(1) // port_number
        .build();
    assert_eq!(payload.len(), READ_AVB_INTERFACE_DESCRIPTOR_RESPONSE_SIZE);

    let descriptor = deserialize_read_avb_interface_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert_eq!(descriptor.mac_address, [0x00, 0x1B, 0x21, 0x00, 0x00, 0x01]);
    assert_eq!(descriptor.clock_identity, UniqueIdentifier::new(0x001B21FFFE000001));
    assert_eq!(descriptor.priority1, 248);
    assert_eq!(descriptor.port_number, 1);
}

#[test]
fn test_clock_source_descriptor_decode() {
    let payload = Buf::common(0, DescriptorType::ClockSource, 2)
        .str64("Internal")
        .u16(7)
        .u32(ClockSourceFlags::LOCAL_ID.bits())
        .u16(0x0000) // clock_source_type
        .u64(u64::MAX) // clock_source_identifier
        .u16(u16::from(DescriptorType::AudioUnit)) // location_type
        .u16(0) // location_index
        .build();
    assert_eq!(payload.len(), READ_CLOCK_SOURCE_DESCRIPTOR_RESPONSE_SIZE);

    let descriptor = deserialize_read_clock_source_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert!(descriptor.clock_source_identifier.is_uninitialized());
    assert_eq!(descriptor.clock_source_location_type, DescriptorType::AudioUnit);
}

#[test]
fn test_memory_object_descriptor_decode() {
    let payload = Buf::common(0, DescriptorType::MemoryObject, 0)
        .str64("Firmware image")
        .u16(8)
        .u16(0x0002) // memory_object_type
        .u16(u16::from(DescriptorType::Entity))
        .u16(0)
        .u64(0x0000_0000_0010_0000) // start_address
        .u64(0x0020_0000) // maximum_length
        .u64(0x001A_0000) // length
        .build();
    assert_eq!(payload.len(), READ_MEMORY_OBJECT_DESCRIPTOR_RESPONSE_SIZE);

    let descriptor = deserialize_read_memory_object_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert_eq!(descriptor.start_address, 0x0010_0000);
    assert_eq!(descriptor.length, 0x001A_0000);
}

#[test]
fn test_locale_and_strings_descriptor_decode() {
    let payload = Buf::common(0, DescriptorType::Locale, 0)
        .str64("en-US")
        .u16(1) // number_of_string_descriptors
        .u16(0) // base_string_descriptor_index
        .build();
    assert_eq!(payload.len(), READ_LOCALE_DESCRIPTOR_RESPONSE_SIZE);

    let locale = deserialize_read_locale_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();
    assert_eq!(locale.locale_id.to_string_lossy(), "en-US");
    assert_eq!(locale.number_of_string_descriptors, 1);

    let mut buf = Buf::common(0, DescriptorType::Strings, 0);
    for i in 0..STRINGS_PER_DESCRIPTOR {
        buf = buf.str64(&format!("string {i}"));
    }
    let payload = buf.build();
    assert_eq!(payload.len(), READ_STRINGS_DESCRIPTOR_RESPONSE_SIZE);

    let strings = deserialize_read_strings_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();
    assert_eq!(strings.strings[0].to_string_lossy(), "string 0");
    assert_eq!(strings.strings[6].to_string_lossy(), "string 6");
}

#[test]
fn test_port_descriptor_decode() {
    let payload = Buf::common(0, DescriptorType::StreamPortInput, 0)
        .u16(0) // clock_domain_index
        .u32(PortFlags::CLOCK_SYNC_SOURCE.bits())
        .u16(0)
        .u16(0)
        .u16(4) // number_of_clusters
        .u16(0) // base_cluster
        .u16(1) // number_of_maps
        .u16(0) // base_map
        .build();
    assert_eq!(payload.len(), READ_STREAM_PORT_DESCRIPTOR_RESPONSE_SIZE);

    let descriptor = deserialize_read_stream_port_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();
    assert_eq!(descriptor.number_of_clusters, 4);
    assert!(descriptor.port_flags.contains(PortFlags::CLOCK_SYNC_SOURCE));

    let payload = Buf::common(0, DescriptorType::ExternalPortOutput, 1)
        .u16(0)
        .u32(0)
        .u16(0)
        .u16(0)
        .u16(u16::from(DescriptorType::AudioCluster)) // signal_type
        .u16(3) // signal_index
        .u16(0) // signal_output
        .u32(52) // block_latency
        .u16(2) // jack_index
        .build();
    assert_eq!(payload.len(), READ_EXTERNAL_PORT_DESCRIPTOR_RESPONSE_SIZE);

    let descriptor = deserialize_read_external_port_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();
    assert_eq!(descriptor.signal_type, DescriptorType::AudioCluster);
    assert_eq!(descriptor.jack_index, 2);

    let payload = Buf::common(0, DescriptorType::InternalPortInput, 0)
        .u16(0)
        .u32(0)
        .u16(0)
        .u16(0)
        .u16(u16::from(DescriptorType::SignalSelector))
        .u16(0)
        .u16(0)
        .u32(0)
        .u16(9) // internal_index
        .build();
    assert_eq!(payload.len(), READ_INTERNAL_PORT_DESCRIPTOR_RESPONSE_SIZE);

    let descriptor = deserialize_read_internal_port_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();
    assert_eq!(descriptor.internal_index, 9);
}

#[test]
fn test_audio_cluster_descriptor_decode() {
    let payload = Buf::common(0, DescriptorType::AudioCluster, 3)
        .str64("Ch 1-8")
        .u16(9)
        .u16(u16::from(DescriptorType::StreamPortInput)) // signal_type
        .u16(0)
        .u16(0)
        .u32(104) // path_latency
        .u32(52) // block_latency
        .u16(8) // channel_count
        .u8(0x40) // format
        .build();
    assert_eq!(payload.len(), READ_AUDIO_CLUSTER_DESCRIPTOR_RESPONSE_SIZE);

    let descriptor = deserialize_read_audio_cluster_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();
    assert_eq!(descriptor.channel_count, 8);
    assert_eq!(descriptor.format, 0x40);
}

#[test]
fn test_audio_map_descriptor_decode() {
    let payload = Buf::common(0, DescriptorType::AudioMap, 0)
        .u16(8) // mappings_offset, from the descriptor base
        .u16(2)
        .u16(0)
        .u16(0)
        .u16(0)
        .u16(0)
        .u16(0)
        .u16(1)
        .u16(0)
        .u16(1)
        .build();

    let descriptor = deserialize_read_audio_map_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert_eq!(
        descriptor.mappings,
        vec![
            AudioMapping {
                stream_index: 0,
                stream_channel: 0,
                cluster_offset: 0,
                cluster_channel: 0
            },
            AudioMapping {
                stream_index: 0,
                stream_channel: 1,
                cluster_offset: 0,
                cluster_channel: 1
            },
        ]
    );
}

#[test]
fn test_clock_domain_descriptor_decode() {
    let payload = Buf::common(0, DescriptorType::ClockDomain, 0)
        .str64("Domain 0")
        .u16(10)
        .u16(1) // clock_source_index
        .u16(76) // clock_sources_offset, from the descriptor base
        .u16(3)
        .u16(0)
        .u16(1)
        .u16(2)
        .build();
    assert_eq!(payload.len(), READ_CLOCK_DOMAIN_DESCRIPTOR_RESPONSE_MIN_SIZE + 6);

    let descriptor = deserialize_read_clock_domain_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &DiscardTrace,
    )
    .unwrap();

    assert_eq!(descriptor.clock_source_index, 1);
    assert_eq!(descriptor.clock_sources, vec![0, 1, 2]);
}

#[test]
fn test_variable_tail_gap_is_traced_not_fatal() {
    // A conforming but loosely packed response: the tail sits a little past
    // the fixed region, and nothing follows it. The seek must swallow the
    // gap, and a fully decoded array with bytes after it is a trace, not an
    // error.
    let payload = Buf::common(0, DescriptorType::AudioMap, 0)
        .u16(12) // four bytes past the fixed region
        .u16(1)
        .u32(0) // the gap
        .u16(5)
        .u16(0)
        .u16(6)
        .u16(0)
        .bytes(&[0x00, 0x00]) // trailing
        .build();

    let trace = CapturingTrace::default();
    let descriptor = deserialize_read_audio_map_descriptor_response(
        &payload,
        READ_COMMON_DESCRIPTOR_RESPONSE_SIZE,
        AecpStatus::Success,
        &trace,
    )
    .unwrap();

    assert_eq!(descriptor.mappings.len(), 1);
    assert_eq!(descriptor.mappings[0].stream_index, 5);
    assert_eq!(trace.0.borrow().as_slice(), &[("AUDIO_MAP", 2)]);
}

#[test]
fn test_dispatcher_selects_body_decoder() {
    let payload = Buf::common(0, DescriptorType::Locale, 0)
        .str64("fr-FR")
        .u16(1)
        .u16(0)
        .build();

    let (common, descriptor) =
        deserialize_read_descriptor_response(&payload, AecpStatus::Success, &DiscardTrace).unwrap();
    assert_eq!(common.descriptor_type, DescriptorType::Locale);
    match descriptor {
        Descriptor::Locale(locale) => assert_eq!(locale.locale_id.to_string_lossy(), "fr-FR"),
        other => panic!("wrong descriptor variant: {other:?}"),
    }
}

#[test]
fn test_dispatcher_rejects_undecodable_descriptor_types() {
    // A type outside the defined table.
    let payload = Buf::common(0, DescriptorType::Unknown(0x0030), 0).build();
    let err = deserialize_read_descriptor_response(&payload, AecpStatus::Success, &DiscardTrace)
        .unwrap_err();
    assert_eq!(
        err,
        ProtocolError::UnknownValue {
            field: "descriptor_type",
            value: 0x0030
        }
    );

    // A defined type with no decoder in this family.
    let payload = Buf::common(0, DescriptorType::Control, 0).build();
    let err = deserialize_read_descriptor_response(&payload, AecpStatus::Success, &DiscardTrace)
        .unwrap_err();
    assert!(matches!(err, ProtocolError::UnknownValue { value: 0x001A, .. }));
}

#[test]
fn test_dispatcher_honors_status_gate() {
    // Non-success: only the common header exists, body comes back default.
    let payload = Buf::common(4, DescriptorType::StreamInput, 2).build();
    let (common, descriptor) =
        deserialize_read_descriptor_response(&payload, AecpStatus::NoSuchDescriptor, &DiscardTrace)
            .unwrap();
    assert_eq!(common.configuration_index, 4);
    assert_eq!(descriptor, Descriptor::Stream(StreamDescriptor::default()));
}
