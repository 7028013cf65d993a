//! Flag bitsets carried in AEM payloads.
//!
//! Every flag field is a 32-bit set on the wire. Bits outside the defined
//! mask of a variant are preserved on decode and re-emitted verbatim, so a
//! payload produced by a newer revision of the standard survives a pass
//! through this model unchanged.

macro_rules! aem_flags {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $flag:ident = $value:expr; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(u32);

        impl $name {
            /// The empty flag set.
            pub const NONE: Self = Self(0);

            $( $(#[$fmeta])* pub const $flag: Self = Self($value); )*

            /// Mask of every bit defined for this variant.
            pub const DEFINED: Self = Self(0 $( | $value )*);

            /// Wrap a raw 32-bit value, keeping unknown bits.
            pub const fn from_bits_retain(bits: u32) -> Self {
                Self(bits)
            }

            /// The raw 32-bit value.
            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Whether every bit of `other` is set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Whether no bit is set.
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), "({:#010x})"), self.0)
            }
        }
    };
}

aem_flags! {
    /// ACQUIRE_ENTITY flags (IEEE 1722.1-2013 Clause 7.4.1).
    AcquireEntityFlags {
        /// Keep the acquisition across a controller restart.
        PERSISTENT = 0x0000_0001;
        /// Release a previously acquired entity.
        RELEASE = 0x8000_0000;
    }
}

aem_flags! {
    /// LOCK_ENTITY flags (IEEE 1722.1-2013 Clause 7.4.2).
    LockEntityFlags {
        /// Release a previously taken lock.
        UNLOCK = 0x0000_0001;
    }
}

aem_flags! {
    /// Stream runtime state flags carried in SET/GET_STREAM_INFO
    /// (IEEE 1722.1-2013 Clause 7.4.15).
    StreamInfoFlags {
        CLASS_B = 0x0000_0001;
        FAST_CONNECT = 0x0000_0002;
        SAVED_STATE = 0x0000_0004;
        STREAMING_WAIT = 0x0000_0008;
        ENCRYPTED_PDU = 0x0000_0010;
        TALKER_FAILED = 0x0000_0020;
        STREAM_VLAN_ID_VALID = 0x0200_0000;
        CONNECTED = 0x0400_0000;
        MSRP_FAILURE_VALID = 0x0800_0000;
        STREAM_DEST_MAC_VALID = 0x1000_0000;
        MSRP_ACC_LAT_VALID = 0x2000_0000;
        STREAM_ID_VALID = 0x4000_0000;
        STREAM_FORMAT_VALID = 0x8000_0000;
    }
}

aem_flags! {
    /// STREAM descriptor capability flags (IEEE 1722.1-2013 Clause 7.2.6).
    StreamFlags {
        /// The stream can be used as a clock synchronization source.
        CLOCK_SYNC_SOURCE = 0x0000_0001;
        CLASS_A = 0x0000_0002;
        CLASS_B = 0x0000_0004;
        SUPPORTS_ENCRYPTED = 0x0000_0008;
        PRIMARY_BACKUP_SUPPORTED = 0x0000_0010;
        PRIMARY_BACKUP_VALID = 0x0000_0020;
        SECONDARY_BACKUP_SUPPORTED = 0x0000_0040;
        SECONDARY_BACKUP_VALID = 0x0000_0080;
        TERTIARY_BACKUP_SUPPORTED = 0x0000_0100;
        TERTIARY_BACKUP_VALID = 0x0000_0200;
    }
}

aem_flags! {
    /// JACK descriptor flags (IEEE 1722.1-2013 Clause 7.2.7).
    JackFlags {
        CLOCK_SYNC_SOURCE = 0x0000_0001;
        /// The jack is not physically accessible on the device.
        CAPTIVE = 0x0000_0002;
    }
}

aem_flags! {
    /// STREAM_PORT / EXTERNAL_PORT / INTERNAL_PORT descriptor flags
    /// (IEEE 1722.1-2013 Clause 7.2.13).
    PortFlags {
        CLOCK_SYNC_SOURCE = 0x0000_0001;
        ASYNC_SAMPLE_RATE_CONV = 0x0000_0002;
        SYNC_SAMPLE_RATE_CONV = 0x0000_0004;
    }
}

aem_flags! {
    /// AVB_INTERFACE descriptor flags (IEEE 1722.1-2013 Clause 7.2.8).
    AvbInterfaceFlags {
        GPTP_GRANDMASTER_SUPPORTED = 0x0000_0001;
        GPTP_SUPPORTED = 0x0000_0002;
        SRP_SUPPORTED = 0x0000_0004;
    }
}

aem_flags! {
    /// CLOCK_SOURCE descriptor flags (IEEE 1722.1-2013 Clause 7.2.9).
    ClockSourceFlags {
        /// The clock source is identified by a stream ID.
        STREAM_ID = 0x0000_0001;
        /// The clock source is identified by a local ID.
        LOCAL_ID = 0x0000_0002;
    }
}
