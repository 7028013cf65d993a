//! Descriptor records of the AVDECC Entity Model.
//!
//! One struct per descriptor type handled by the READ_DESCRIPTOR response
//! decoders, mirroring the field lists of IEEE 1722.1-2013 Clause 7.2. All
//! fields are public; a default-constructed descriptor is the value a
//! decoder returns when the response status gates the body off.

use std::collections::{BTreeSet, HashMap};

use crate::flags::{
    AvbInterfaceFlags, ClockSourceFlags, JackFlags, PortFlags, StreamFlags, StreamInfoFlags,
};
use crate::types::{
    AvdeccFixedString, ClockDomainIndex, ClockSourceIndex, ConfigurationIndex, DescriptorIndex,
    DescriptorType, LocalizedStringReference, MacAddress, SamplingRate, StreamFormat,
    UniqueIdentifier,
};

/// ENTITY descriptor (Clause 7.2.1).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityDescriptor {
    pub entity_id: UniqueIdentifier,
    pub vendor_entity_model_id: UniqueIdentifier,
    pub entity_capabilities: u32,
    pub talker_stream_sources: u16,
    pub talker_capabilities: u16,
    pub listener_stream_sinks: u16,
    pub listener_capabilities: u16,
    pub controller_capabilities: u32,
    pub available_index: u32,
    pub association_id: UniqueIdentifier,
    pub entity_name: AvdeccFixedString,
    pub vendor_name_string: LocalizedStringReference,
    pub model_name_string: LocalizedStringReference,
    pub firmware_version: AvdeccFixedString,
    pub group_name: AvdeccFixedString,
    pub serial_number: AvdeccFixedString,
    pub configurations_count: u16,
    pub current_configuration: ConfigurationIndex,
}

/// CONFIGURATION descriptor (Clause 7.2.2).
///
/// `descriptor_counts` maps each descriptor type present in the
/// configuration to the number of top-level descriptors of that type. The
/// wire carries the entries in an arbitrary order; the mapping is keyed, not
/// ordered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigurationDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub descriptor_counts: HashMap<DescriptorType, u16>,
}

/// AUDIO_UNIT descriptor (Clause 7.2.3).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioUnitDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub clock_domain_index: ClockDomainIndex,
    pub number_of_stream_input_ports: u16,
    pub base_stream_input_port: DescriptorIndex,
    pub number_of_stream_output_ports: u16,
    pub base_stream_output_port: DescriptorIndex,
    pub number_of_external_input_ports: u16,
    pub base_external_input_port: DescriptorIndex,
    pub number_of_external_output_ports: u16,
    pub base_external_output_port: DescriptorIndex,
    pub number_of_internal_input_ports: u16,
    pub base_internal_input_port: DescriptorIndex,
    pub number_of_internal_output_ports: u16,
    pub base_internal_output_port: DescriptorIndex,
    pub number_of_controls: u16,
    pub base_control: DescriptorIndex,
    pub number_of_signal_selectors: u16,
    pub base_signal_selector: DescriptorIndex,
    pub number_of_mixers: u16,
    pub base_mixer: DescriptorIndex,
    pub number_of_matrices: u16,
    pub base_matrix: DescriptorIndex,
    pub number_of_splitters: u16,
    pub base_splitter: DescriptorIndex,
    pub number_of_combiners: u16,
    pub base_combiner: DescriptorIndex,
    pub number_of_demultiplexers: u16,
    pub base_demultiplexer: DescriptorIndex,
    pub number_of_multiplexers: u16,
    pub base_multiplexer: DescriptorIndex,
    pub number_of_transcoders: u16,
    pub base_transcoder: DescriptorIndex,
    pub number_of_control_blocks: u16,
    pub base_control_block: DescriptorIndex,
    pub current_sampling_rate: SamplingRate,
    pub sampling_rates: BTreeSet<SamplingRate>,
}

/// STREAM_INPUT / STREAM_OUTPUT descriptor (Clause 7.2.6).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub clock_domain_index: ClockDomainIndex,
    pub stream_flags: StreamFlags,
    pub current_format: StreamFormat,
    pub formats: BTreeSet<StreamFormat>,
    pub backup_talker_entity_id_0: UniqueIdentifier,
    pub backup_talker_unique_id_0: u16,
    pub backup_talker_entity_id_1: UniqueIdentifier,
    pub backup_talker_unique_id_1: u16,
    pub backup_talker_entity_id_2: UniqueIdentifier,
    pub backup_talker_unique_id_2: u16,
    pub backedup_talker_entity_id: UniqueIdentifier,
    pub backedup_talker_unique: u16,
    pub avb_interface_index: DescriptorIndex,
    pub buffer_length: u32,
}

/// JACK_INPUT / JACK_OUTPUT descriptor (Clause 7.2.7).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JackDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub jack_flags: JackFlags,
    pub jack_type: u16,
    pub number_of_controls: u16,
    pub base_control: DescriptorIndex,
}

/// AVB_INTERFACE descriptor (Clause 7.2.8).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvbInterfaceDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub mac_address: MacAddress,
    pub interface_flags: AvbInterfaceFlags,
    pub clock_identity: UniqueIdentifier,
    pub priority1: u8,
    pub clock_class: u8,
    pub offset_scaled_log_variance: u16,
    pub clock_accuracy: u8,
    pub priority2: u8,
    pub domain_number: u8,
    pub log_sync_interval: u8,
    pub log_announce_interval: u8,
    pub log_pdelay_interval: u8,
    pub port_number: u16,
}

/// CLOCK_SOURCE descriptor (Clause 7.2.9).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockSourceDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub clock_source_flags: ClockSourceFlags,
    pub clock_source_type: u16,
    pub clock_source_identifier: UniqueIdentifier,
    pub clock_source_location_type: DescriptorType,
    pub clock_source_location_index: DescriptorIndex,
}

/// MEMORY_OBJECT descriptor (Clause 7.2.10).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryObjectDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub memory_object_type: u16,
    pub target_descriptor_type: DescriptorType,
    pub target_descriptor_index: DescriptorIndex,
    pub start_address: u64,
    pub maximum_length: u64,
    pub length: u64,
}

/// LOCALE descriptor (Clause 7.2.11).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocaleDescriptor {
    pub locale_id: AvdeccFixedString,
    pub number_of_string_descriptors: u16,
    pub base_string_descriptor_index: DescriptorIndex,
}

/// Number of strings in one STRINGS descriptor.
pub const STRINGS_PER_DESCRIPTOR: usize = 7;

/// STRINGS descriptor (Clause 7.2.12).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringsDescriptor {
    pub strings: [AvdeccFixedString; STRINGS_PER_DESCRIPTOR],
}

impl Default for StringsDescriptor {
    fn default() -> Self {
        Self {
            strings: [AvdeccFixedString::default(); STRINGS_PER_DESCRIPTOR],
        }
    }
}

/// STREAM_PORT_INPUT / STREAM_PORT_OUTPUT descriptor (Clause 7.2.13).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamPortDescriptor {
    pub clock_domain_index: ClockDomainIndex,
    pub port_flags: PortFlags,
    pub number_of_controls: u16,
    pub base_control: DescriptorIndex,
    pub number_of_clusters: u16,
    pub base_cluster: DescriptorIndex,
    pub number_of_maps: u16,
    pub base_map: DescriptorIndex,
}

/// EXTERNAL_PORT_INPUT / EXTERNAL_PORT_OUTPUT descriptor (Clause 7.2.14).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalPortDescriptor {
    pub clock_domain_index: ClockDomainIndex,
    pub port_flags: PortFlags,
    pub number_of_controls: u16,
    pub base_control: DescriptorIndex,
    pub signal_type: DescriptorType,
    pub signal_index: DescriptorIndex,
    pub signal_output: u16,
    pub block_latency: u32,
    pub jack_index: DescriptorIndex,
}

/// INTERNAL_PORT_INPUT / INTERNAL_PORT_OUTPUT descriptor (Clause 7.2.15).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternalPortDescriptor {
    pub clock_domain_index: ClockDomainIndex,
    pub port_flags: PortFlags,
    pub number_of_controls: u16,
    pub base_control: DescriptorIndex,
    pub signal_type: DescriptorType,
    pub signal_index: DescriptorIndex,
    pub signal_output: u16,
    pub block_latency: u32,
    pub internal_index: DescriptorIndex,
}

/// AUDIO_CLUSTER descriptor (Clause 7.2.16).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioClusterDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub signal_type: DescriptorType,
    pub signal_index: DescriptorIndex,
    pub signal_output: u16,
    pub path_latency: u32,
    pub block_latency: u32,
    pub channel_count: u16,
    pub format: u8,
}

/// One audio channel mapping of an AUDIO_MAP descriptor (Clause 7.2.19.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioMapping {
    pub stream_index: DescriptorIndex,
    pub stream_channel: u16,
    pub cluster_offset: u16,
    pub cluster_channel: u16,
}

/// AUDIO_MAP descriptor (Clause 7.2.19).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioMapDescriptor {
    pub mappings: Vec<AudioMapping>,
}

/// CLOCK_DOMAIN descriptor (Clause 7.2.32).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockDomainDescriptor {
    pub object_name: AvdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub clock_source_index: ClockSourceIndex,
    pub clock_sources: Vec<ClockSourceIndex>,
}

/// Stream runtime parameters exchanged via SET/GET_STREAM_INFO
/// (Clause 7.4.15).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamInfo {
    pub stream_info_flags: StreamInfoFlags,
    pub stream_format: StreamFormat,
    pub stream_id: UniqueIdentifier,
    pub msrp_accumulated_latency: u32,
    pub stream_dest_mac: MacAddress,
    pub msrp_failure_code: u8,
    pub msrp_failure_bridge_id: u64,
    pub stream_vlan_id: u16,
}
