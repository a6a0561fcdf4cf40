//! Packet composition over bit-stream fragments
//!
//! [`PacketBuilder`] concatenates independently produced [`BitStream`]
//! fragments into one larger stream, honoring each fragment's declared byte
//! alignment. Fragment order defines final bit order; the builder never
//! reorders or deduplicates.
//!
//! # Alignment
//!
//! A fragment flagged with [`BitStream::set_begin_byte_aligned`] forces the
//! builder to spool its internal stream to the next byte boundary before the
//! fragment's first bit is copied. The zero bits consumed by the spool are
//! padding in the underlying buffer, not fragment content.

use crate::bitstream::BitStream;
use crate::error::BerResult;

/// Compositor that merges [`BitStream`] fragments into a single stream.
///
/// The builder owns its internal accumulation stream outright; appending a
/// fragment copies the fragment's content and leaves the fragment itself
/// untouched and independently reusable.
pub struct PacketBuilder {
    stream: BitStream,
}

impl PacketBuilder {
    /// Create a new, empty packet builder.
    pub fn new() -> Self {
        Self {
            stream: BitStream::new(),
        }
    }

    /// Append one fragment to the composed stream.
    ///
    /// # Arguments
    /// * `fragment` - The encoded fragment to copy in. Its full bytes are
    ///   appended first, then any 1..=7 bit remainder taken from the high
    ///   bits of its last padded byte.
    ///
    /// # Errors
    /// Never fails in practice; the remainder path appends fewer than 8 bits
    /// by construction. The `Result` keeps the seam uniform with fallible
    /// fragment producers.
    pub fn append(&mut self, fragment: &BitStream) -> BerResult<()> {
        if fragment.begins_byte_aligned() {
            self.stream.spool_to_byte_boundary();
        }
        let bytes = fragment.to_padded_bytes();
        let mut bits_to_append = fragment.bit_count();
        log::trace!(
            "appending fragment: {} bits, byte-aligned: {}",
            bits_to_append,
            fragment.begins_byte_aligned()
        );
        let mut index = 0;
        while bits_to_append >= 8 {
            self.stream.append_byte(bytes[index]);
            index += 1;
            bits_to_append -= 8;
        }
        if bits_to_append > 0 {
            // Remainder bits sit in the high end of the last padded byte.
            let remainder = bytes[index] >> (8 - bits_to_append);
            self.stream.append_low_bits(bits_to_append, remainder)?;
        }
        Ok(())
    }

    /// Append fragments in iteration order.
    ///
    /// Order is a strict guarantee: the output is bit-identical to calling
    /// [`append`](Self::append) once per fragment in the same order.
    pub fn append_all<'a, I>(&mut self, fragments: I) -> BerResult<()>
    where
        I: IntoIterator<Item = &'a BitStream>,
    {
        for fragment in fragments {
            self.append(fragment)?;
        }
        Ok(())
    }

    /// Total number of content and padding bits accumulated so far.
    pub fn bit_count(&self) -> usize {
        self.stream.bit_count()
    }

    /// Get the composed content as a padded byte array.
    pub fn to_padded_bytes(&self) -> Vec<u8> {
        self.stream.to_padded_bytes()
    }

    /// Finalize the builder, surrendering the internal stream.
    pub fn into_bit_stream(self) -> BitStream {
        self.stream
    }
}

impl Default for PacketBuilder {
    fn default() -> Self {
        Self::new()
    }
}
