//! BER definite-length octets

use berstream_core::BitStream;
use serde::{Deserialize, Serialize};

/// BER length, definite form only.
///
/// Short form carries lengths 0-127 in a single octet; long form carries a
/// length-of-length octet (bit 8 set) followed by the big-endian length
/// octets. Indefinite length is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BerLength {
    /// Short form: length 0-127
    Short(u8),
    /// Long form: length > 127
    Long(usize),
}

impl BerLength {
    /// Create a length, choosing the form automatically.
    pub fn new(length: usize) -> Self {
        if length < 128 {
            BerLength::Short(length as u8)
        } else {
            BerLength::Long(length)
        }
    }

    /// Get the length value.
    pub fn value(&self) -> usize {
        match self {
            BerLength::Short(length) => *length as usize,
            BerLength::Long(length) => *length,
        }
    }

    /// Encode the length octets as a byte-aligned fragment.
    pub fn encode(&self) -> BitStream {
        let mut stream = BitStream::new();
        match self {
            BerLength::Short(length) => {
                stream.append_byte(*length);
            }
            BerLength::Long(length) => {
                let mut num_bytes = 0usize;
                let mut remaining = *length;
                while remaining > 0 {
                    num_bytes += 1;
                    remaining >>= 8;
                }
                if num_bytes == 0 {
                    num_bytes = 1;
                }
                stream.append_byte(0x80 | num_bytes as u8);
                for i in (0..num_bytes).rev() {
                    stream.append_byte(((length >> (i * 8)) & 0xFF) as u8);
                }
            }
        }
        stream.set_begin_byte_aligned();
        stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form() {
        let length = BerLength::new(100);
        assert_eq!(length.value(), 100);
        assert_eq!(length.encode().to_padded_bytes(), vec![100]);
    }

    #[test]
    fn test_short_form_boundary() {
        assert_eq!(BerLength::new(127), BerLength::Short(127));
        assert_eq!(BerLength::new(128), BerLength::Long(128));
    }

    #[test]
    fn test_long_form() {
        let length = BerLength::new(1000);
        assert_eq!(length.encode().to_padded_bytes(), vec![0x82, 0x03, 0xE8]);
    }

    #[test]
    fn test_long_form_single_octet_value() {
        let length = BerLength::new(200);
        assert_eq!(length.encode().to_padded_bytes(), vec![0x81, 200]);
    }

    #[test]
    fn test_encoded_fragment_is_byte_aligned() {
        assert!(BerLength::new(5).encode().begins_byte_aligned());
    }
}
