//! Bit-granular output stream
//!
//! [`BitStream`] is an append-only, growable output buffer with bit
//! resolution. It is the unit of production in BER encoding: every logical
//! field (tag octet, length octets, value bits) is first accumulated into its
//! own `BitStream`, and the resulting fragments are merged in wire order by a
//! [`PacketBuilder`](crate::packet::PacketBuilder).
//!
//! # Bit Order
//!
//! Bits are written most-significant-bit first within each byte, matching the
//! BER transfer syntax. A byte is complete only once eight bits have been
//! appended to it; `to_padded_bytes` zero-pads the trailing partial byte.
//!
//! # Threading
//!
//! `BitStream` is a plain single-threaded mutable builder. It is not safe for
//! concurrent mutation and never shares its backing buffer: merging a stream
//! into a `PacketBuilder` copies its content, leaving the original usable.

use crate::error::{BerError, BerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed additive growth increment for the backing buffer, in bytes.
const GROWTH_CHUNK: usize = 50;

/// Append-only bit-level output buffer.
///
/// Created empty; mutated only through the `append_*` and
/// `spool_to_byte_boundary` operations; read out without mutation through
/// `bit_count` and `to_padded_bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitStream {
    /// Backing storage. Always holds at least one writable byte at
    /// `position`; grown by `GROWTH_CHUNK` on every byte advance that would
    /// step past the end.
    #[serde(with = "serde_bytes")]
    buffer: Vec<u8>,
    /// Index of the byte currently being filled.
    position: usize,
    /// Number of valid high bits already written into `buffer[position]`.
    /// Invariant: `0 <= set_bits < 8`.
    set_bits: u8,
    /// Whether this stream's content must start on a byte boundary when
    /// appended to another stream.
    begin_byte_aligned: bool,
}

impl BitStream {
    /// Create a new, empty bit stream.
    pub fn new() -> Self {
        Self {
            buffer: vec![0; GROWTH_CHUNK],
            position: 0,
            set_bits: 0,
            begin_byte_aligned: false,
        }
    }

    /// Append a single bit.
    ///
    /// # Arguments
    /// * `bit` - `true` sets the current most-significant unset bit of the
    ///   in-progress byte; `false` leaves it zero.
    ///
    /// When the eighth bit of the current byte is appended, the byte is
    /// complete and the write position advances to a fresh zeroed byte.
    pub fn append_bit(&mut self, bit: bool) {
        if bit {
            self.buffer[self.position] |= 1 << (7 - self.set_bits);
        }
        self.set_bits += 1;
        if self.set_bits == 8 {
            self.set_bits = 0;
            self.advance_byte();
        }
    }

    /// Append a full 8-bit value, regardless of the current bit offset.
    ///
    /// # Arguments
    /// * `data` - The byte to append.
    ///
    /// When the current byte is partially filled (`set_bits > 0`), the high
    /// `8 - set_bits` bits of `data` complete the current byte and the low
    /// `set_bits` bits land in the high end of the next byte, so the stream's
    /// bit offset is unchanged after the call.
    pub fn append_byte(&mut self, data: u8) {
        if self.set_bits == 0 {
            self.buffer[self.position] = data;
            self.advance_byte();
            return;
        }
        let free_bits = 8 - self.set_bits;
        self.buffer[self.position] |= data >> self.set_bits;
        self.advance_byte();
        self.buffer[self.position] = data << free_bits;
    }

    /// Append the lowest `how_many_bits` bits of `data`, most significant of
    /// the selected bits first.
    ///
    /// # Arguments
    /// * `how_many_bits` - Number of low bits of `data` to append, must be
    ///   less than 8.
    /// * `data` - Source byte; bits above `how_many_bits` are ignored.
    ///
    /// # Errors
    /// Returns `BerError::InvalidArgument` if `how_many_bits >= 8`. A full
    /// byte must be appended with [`append_byte`](Self::append_byte).
    pub fn append_low_bits(&mut self, how_many_bits: usize, data: u8) -> BerResult<()> {
        if how_many_bits >= 8 {
            return Err(BerError::InvalidArgument(format!(
                "append_low_bits supports at most 7 bits, got {}",
                how_many_bits
            )));
        }
        for shift in (0..how_many_bits).rev() {
            self.append_bit((data >> shift) & 1 == 1);
        }
        Ok(())
    }

    /// Total number of bits appended so far.
    pub fn bit_count(&self) -> usize {
        8 * self.position + usize::from(self.set_bits)
    }

    /// Get the accumulated content as a byte array.
    ///
    /// # Returns
    /// A copy of the buffer truncated to the logical content: the trailing
    /// partial byte, if any, is included with its unset low bits as zero
    /// padding. Over-allocated capacity is never exposed.
    pub fn to_padded_bytes(&self) -> Vec<u8> {
        let len = self.position + usize::from(self.set_bits != 0);
        self.buffer[..len].to_vec()
    }

    /// Force the write position to the start of the next byte, zero-padding
    /// any unused bits of the current byte. Idempotent when already aligned.
    pub fn spool_to_byte_boundary(&mut self) {
        if self.set_bits != 0 {
            self.set_bits = 0;
            self.advance_byte();
        }
    }

    /// Mark this stream as requiring byte alignment at its start when merged
    /// into a [`PacketBuilder`](crate::packet::PacketBuilder).
    ///
    /// Used for BER constructs whose content is defined to be byte-aligned,
    /// e.g. value octets following a length octet.
    pub fn set_begin_byte_aligned(&mut self) {
        self.begin_byte_aligned = true;
    }

    /// Whether this stream's content must start on a byte boundary in the
    /// composed output.
    pub fn begins_byte_aligned(&self) -> bool {
        self.begin_byte_aligned
    }

    /// Advance to the next byte, growing the backing buffer when the new
    /// position would step past the end. Capacity is re-checked on every
    /// advance because growth is by a fixed chunk, not proportional.
    fn advance_byte(&mut self) {
        self.position += 1;
        if self.position >= self.buffer.len() {
            self.buffer.resize(self.buffer.len() + GROWTH_CHUNK, 0);
        }
    }
}

impl Default for BitStream {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_padded_bytes() {
            write!(f, "{:02X} ", byte)?;
        }
        write!(f, "({} bits)", self.bit_count())
    }
}
