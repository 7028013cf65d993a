//! Wire-level checks against known-good byte sequences.

use avdecc_aem_payload::*;
use avdecc_model::*;

#[test]
fn test_acquire_entity_command_wire_image() {
    let cmd = AcquireEntity {
        flags: AcquireEntityFlags::PERSISTENT,
        owner_id: UniqueIdentifier::new(0x0011223344556677),
        descriptor_type: DescriptorType::Entity,
        descriptor_index: 0,
    };
    let wire = serialize_acquire_entity_command(&cmd).unwrap();
    assert_eq!(
        wire.as_slice(),
        &[
            0x00, 0x00, 0x00, 0x01, // flags
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, // owner_id
            0x00, 0x00, // descriptor_type
            0x00, 0x00, // descriptor_index
        ]
    );
    assert_eq!(deserialize_acquire_entity_command(wire.as_slice()).unwrap(), cmd);
}

#[test]
fn test_read_descriptor_command_wire_image() {
    let wire = [0x00, 0x01, 0x00, 0x00, 0x00, 0x05, 0x00, 0x02];
    let cmd = deserialize_read_descriptor_command(&wire).unwrap();
    assert_eq!(cmd.configuration_index, 1);
    assert_eq!(cmd.descriptor_type, DescriptorType::StreamInput);
    assert_eq!(cmd.descriptor_index, 2);

    let reencoded = serialize_read_descriptor_command(&cmd).unwrap();
    assert_eq!(reencoded.as_slice(), &wire);
}

#[test]
fn test_get_audio_map_response_length_and_truncation() {
    let resp = GetAudioMapResponse {
        descriptor_type: DescriptorType::StreamPortInput,
        descriptor_index: 0,
        map_index: 0,
        number_of_maps: 1,
        mappings: vec![
            AudioMapping {
                stream_index: 0,
                stream_channel: 0,
                cluster_offset: 0,
                cluster_channel: 0,
            },
            AudioMapping {
                stream_index: 0,
                stream_channel: 1,
                cluster_offset: 0,
                cluster_channel: 1,
            },
        ],
    };
    let wire = serialize_get_audio_map_response(&resp).unwrap();
    assert_eq!(wire.bytes_written(), 28);

    let decoded = deserialize_get_audio_map_response(wire.as_slice(), &DiscardTrace).unwrap();
    assert_eq!(decoded, resp);

    // One byte short of the second mapping.
    let err =
        deserialize_get_audio_map_response(&wire.as_slice()[..27], &DiscardTrace).unwrap_err();
    assert_eq!(
        err,
        ProtocolError::TruncatedPayload {
            needed: 16,
            available: 15
        }
    );
}

#[test]
fn test_stream_info_reserved_flag_bit_survives() {
    let wire = serialize_set_stream_info_command(&StreamInfoPayload {
        descriptor_type: DescriptorType::StreamInput,
        descriptor_index: 0,
        info: StreamInfo {
            stream_info_flags: StreamInfoFlags::from_bits_retain(0x8001_0000),
            ..StreamInfo::default()
        },
    })
    .unwrap();
    assert_eq!(&wire.as_slice()[4..8], &[0x80, 0x01, 0x00, 0x00]);

    let decoded = deserialize_set_stream_info_command(wire.as_slice()).unwrap();
    assert_eq!(decoded.info.stream_info_flags.bits(), 0x8001_0000);

    let reencoded = serialize_set_stream_info_command(&decoded).unwrap();
    assert_eq!(reencoded.as_slice(), wire.as_slice());
}

#[test]
fn test_set_name_wire_layout() {
    let wire = serialize_set_name_command(&NamePayload {
        descriptor_type: DescriptorType::StreamInput,
        descriptor_index: 1,
        name_index: 0,
        configuration_index: 0,
        name: AvdeccFixedString::new("Mix bus"),
    })
    .unwrap();

    assert_eq!(wire.bytes_written(), 72);
    assert_eq!(&wire.as_slice()[..2], &[0x00, 0x05]);
    assert_eq!(&wire.as_slice()[8..15], b"Mix bus");
    // NUL padding to the end of the fixed string.
    assert!(wire.as_slice()[15..].iter().all(|&b| b == 0));
}
