//! Fixed-capacity byte cursors.
//!
//! [`Writer`] and [`Reader`] are the only code in this crate that touches
//! raw bytes. Every multi-byte integer crosses them in network byte order.

use avdecc_model::{
    AvdeccFixedString, DescriptorType, MacAddress, SamplingRate, StreamFormat, UniqueIdentifier,
};

use crate::error::ProtocolError;

/// Sequential writer over a fixed-capacity buffer.
///
/// `CAP` is the payload size constant of the message being serialized, so a
/// layout that would overflow its declared size cannot be written without an
/// error surfacing. [`Writer::as_slice`] exposes exactly the bytes written.
#[derive(Debug, Clone)]
pub struct Writer<const CAP: usize> {
    buf: [u8; CAP],
    len: usize,
}

impl<const CAP: usize> Default for Writer<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> Writer<CAP> {
    /// Create an empty writer.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; CAP],
            len: 0,
        }
    }

    /// Total capacity in bytes.
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Number of bytes written so far.
    pub const fn bytes_written(&self) -> usize {
        self.len
    }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Append raw bytes.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), ProtocolError> {
        let end = self.len + bytes.len();
        if end > CAP {
            return Err(ProtocolError::CapacityExceeded {
                requested: end,
                capacity: CAP,
            });
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    /// Append a byte.
    pub fn put_u8(&mut self, value: u8) -> Result<(), ProtocolError> {
        self.put_bytes(&[value])
    }

    /// Append a 16-bit integer, big-endian.
    pub fn put_u16(&mut self, value: u16) -> Result<(), ProtocolError> {
        self.put_bytes(&value.to_be_bytes())
    }

    /// Append a 32-bit integer, big-endian.
    pub fn put_u32(&mut self, value: u32) -> Result<(), ProtocolError> {
        self.put_bytes(&value.to_be_bytes())
    }

    /// Append a 64-bit integer, big-endian.
    pub fn put_u64(&mut self, value: u64) -> Result<(), ProtocolError> {
        self.put_bytes(&value.to_be_bytes())
    }

    /// Append a descriptor type code.
    pub fn put_descriptor_type(&mut self, value: DescriptorType) -> Result<(), ProtocolError> {
        self.put_u16(u16::from(value))
    }

    /// Append a 64-bit unique identifier.
    pub fn put_unique_identifier(&mut self, value: UniqueIdentifier) -> Result<(), ProtocolError> {
        self.put_u64(value.value())
    }

    /// Append a stream format.
    pub fn put_stream_format(&mut self, value: StreamFormat) -> Result<(), ProtocolError> {
        self.put_u64(value.value())
    }

    /// Append a sampling rate.
    pub fn put_sampling_rate(&mut self, value: SamplingRate) -> Result<(), ProtocolError> {
        self.put_u32(value.value())
    }

    /// Append a fixed 64-byte string, NUL padding included.
    pub fn put_fixed_string(&mut self, value: &AvdeccFixedString) -> Result<(), ProtocolError> {
        self.put_bytes(value.as_bytes())
    }

    /// Append a 6-byte MAC address.
    pub fn put_mac_address(&mut self, value: &MacAddress) -> Result<(), ProtocolError> {
        self.put_bytes(value)
    }
}

/// Position-tracked reader over a borrowed byte buffer.
///
/// Every read advances the position by the exact width of the value read; a
/// read with fewer bytes remaining fails with
/// [`ProtocolError::TruncatedPayload`] and leaves the position unchanged.
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current position from the start of the buffer.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the buffer.
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Move to an absolute position.
    pub fn set_position(&mut self, pos: usize) -> Result<(), ProtocolError> {
        if pos > self.buf.len() {
            return Err(ProtocolError::BadOffset {
                offset: pos,
                valid_from: 0,
                valid_to: self.buf.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    fn take(&mut self, width: usize) -> Result<&'a [u8], ProtocolError> {
        if self.remaining() < width {
            return Err(ProtocolError::TruncatedPayload {
                needed: width,
                available: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + width];
        self.pos += width;
        Ok(bytes)
    }

    /// Read a fixed-width byte array.
    pub fn get_bytes<const N: usize>(&mut self) -> Result<[u8; N], ProtocolError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read a byte.
    pub fn get_u8(&mut self) -> Result<u8, ProtocolError> {
        Ok(self.take(1)?[0])
    }

    /// Read a 16-bit integer, big-endian.
    pub fn get_u16(&mut self) -> Result<u16, ProtocolError> {
        Ok(u16::from_be_bytes(self.get_bytes()?))
    }

    /// Read a 32-bit integer, big-endian.
    pub fn get_u32(&mut self) -> Result<u32, ProtocolError> {
        Ok(u32::from_be_bytes(self.get_bytes()?))
    }

    /// Read a 64-bit integer, big-endian.
    pub fn get_u64(&mut self) -> Result<u64, ProtocolError> {
        Ok(u64::from_be_bytes(self.get_bytes()?))
    }

    /// Read a descriptor type code.
    ///
    /// Values outside the defined table come back as
    /// [`DescriptorType::Unknown`]; whether that is an error depends on what
    /// the caller does with the value.
    pub fn get_descriptor_type(&mut self) -> Result<DescriptorType, ProtocolError> {
        Ok(DescriptorType::from(self.get_u16()?))
    }

    /// Read a 64-bit unique identifier.
    pub fn get_unique_identifier(&mut self) -> Result<UniqueIdentifier, ProtocolError> {
        Ok(UniqueIdentifier::new(self.get_u64()?))
    }

    /// Read a stream format.
    pub fn get_stream_format(&mut self) -> Result<StreamFormat, ProtocolError> {
        Ok(StreamFormat::new(self.get_u64()?))
    }

    /// Read a sampling rate.
    pub fn get_sampling_rate(&mut self) -> Result<SamplingRate, ProtocolError> {
        Ok(SamplingRate::new(self.get_u32()?))
    }

    /// Read a fixed 64-byte string.
    pub fn get_fixed_string(&mut self) -> Result<AvdeccFixedString, ProtocolError> {
        Ok(AvdeccFixedString::from_bytes(self.get_bytes()?))
    }

    /// Read a 6-byte MAC address.
    pub fn get_mac_address(&mut self) -> Result<MacAddress, ProtocolError> {
        self.get_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_big_endian() {
        let mut w = Writer::<15>::new();
        w.put_u8(0xAB).unwrap();
        w.put_u16(0x0102).unwrap();
        w.put_u32(0x03040506).unwrap();
        w.put_u64(0x0708090A0B0C0D0E).unwrap();
        assert_eq!(w.bytes_written(), 15);
        assert_eq!(
            w.as_slice(),
            &[0xAB, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E]
        );
    }

    #[test]
    fn test_writer_capacity_exceeded() {
        let mut w = Writer::<3>::new();
        w.put_u16(0xFFFF).unwrap();
        let err = w.put_u16(0xFFFF).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::CapacityExceeded {
                requested: 4,
                capacity: 3
            }
        );
        // The failed write did not advance the cursor.
        assert_eq!(w.bytes_written(), 2);
    }

    #[test]
    fn test_reader_tracks_position() {
        let data = [0x00, 0x01, 0x00, 0x02, 0xFF];
        let mut r = Reader::new(&data);
        assert_eq!(r.get_u16().unwrap(), 1);
        assert_eq!(r.position(), 2);
        assert_eq!(r.get_u16().unwrap(), 2);
        assert_eq!(r.remaining(), 1);
    }

    #[test]
    fn test_reader_truncation() {
        let data = [0x00, 0x01, 0x02];
        let mut r = Reader::new(&data);
        let err = r.get_u32().unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TruncatedPayload {
                needed: 4,
                available: 3
            }
        );
        // Position unchanged after the failed read.
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_reader_set_position() {
        let data = [0u8; 8];
        let mut r = Reader::new(&data);
        r.set_position(8).unwrap();
        assert_eq!(r.remaining(), 0);
        let err = r.set_position(9).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::BadOffset {
                offset: 9,
                valid_from: 0,
                valid_to: 8
            }
        );
    }
}
