//! BER tag class and identifier octet

use berstream_core::{BerError, BerResult, BitStream};
use serde::{Deserialize, Serialize};

/// BER tag class
///
/// ASN.1 defines four tag classes, carried in the two high bits of the
/// identifier octet:
/// - **Universal**: standard ASN.1 types (INTEGER, OCTET STRING, etc.)
/// - **Application**: application-wide types
/// - **Context-specific**: context-dependent types (used in SEQUENCE/SET)
/// - **Private**: private/implementation-specific types
///
/// The 2-bit numeric mapping is fixed by ITU-T X.690 and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Asn1TagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl Asn1TagClass {
    /// Get the tag class for a 2-bit wire value.
    ///
    /// # Errors
    /// Returns `BerError::InvalidTagClass` for any value outside 0-3,
    /// including negative input.
    pub fn from_value(value: i32) -> BerResult<Self> {
        match value {
            0 => Ok(Asn1TagClass::Universal),
            1 => Ok(Asn1TagClass::Application),
            2 => Ok(Asn1TagClass::ContextSpecific),
            3 => Ok(Asn1TagClass::Private),
            other => Err(BerError::InvalidTagClass(other)),
        }
    }

    /// The 2-bit wire value of this class. Total inverse of
    /// [`from_value`](Self::from_value).
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// BER tag identifier
///
/// Identifies one wire-level element: class, constructed/primitive flag, and
/// tag number. Only single-octet identifiers (tag number 0-30) are
/// supported; multi-octet tag numbers are out of scope.
///
/// Identifier octet layout:
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C P T T T T T
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Asn1Tag {
    class: Asn1TagClass,
    constructed: bool,
    number: u32,
}

impl Asn1Tag {
    /// Create a new tag.
    pub fn new(class: Asn1TagClass, constructed: bool, number: u32) -> Self {
        Self {
            class,
            constructed,
            number,
        }
    }

    /// Create a Universal class tag.
    pub fn universal(constructed: bool, number: u32) -> Self {
        Self::new(Asn1TagClass::Universal, constructed, number)
    }

    /// Create an Application class tag.
    pub fn application(constructed: bool, number: u32) -> Self {
        Self::new(Asn1TagClass::Application, constructed, number)
    }

    /// Create a Context-specific class tag.
    pub fn context_specific(constructed: bool, number: u32) -> Self {
        Self::new(Asn1TagClass::ContextSpecific, constructed, number)
    }

    /// Create a Private class tag.
    pub fn private(constructed: bool, number: u32) -> Self {
        Self::new(Asn1TagClass::Private, constructed, number)
    }

    /// Get the tag class.
    pub fn class(&self) -> Asn1TagClass {
        self.class
    }

    /// Check whether the tag marks a constructed encoding.
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Get the tag number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Encode the identifier octet as a byte-aligned fragment.
    ///
    /// # Errors
    /// Returns `BerError::InvalidArgument` for tag numbers above 30, which
    /// would require the multi-octet identifier form.
    pub fn encode(&self) -> BerResult<BitStream> {
        if self.number > 30 {
            return Err(BerError::InvalidArgument(format!(
                "multi-octet tag numbers are not supported: {}",
                self.number
            )));
        }
        let constructed_bit = if self.constructed { 0x20 } else { 0x00 };
        let mut stream = BitStream::new();
        stream.append_byte((self.class.value() << 6) | constructed_bit | (self.number as u8 & 0x1F));
        stream.set_begin_byte_aligned();
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_class_round_trip() {
        for value in 0..=3 {
            let class = Asn1TagClass::from_value(value).unwrap();
            assert_eq!(class.value() as i32, value);
        }
    }

    #[test]
    fn test_tag_class_rejects_out_of_range() {
        assert!(Asn1TagClass::from_value(4).is_err());
        assert!(Asn1TagClass::from_value(-1).is_err());
    }

    #[test]
    fn test_encode_universal_primitive() {
        let tag = Asn1Tag::universal(false, 2); // INTEGER
        let stream = tag.encode().unwrap();
        assert!(stream.begins_byte_aligned());
        assert_eq!(stream.to_padded_bytes(), vec![0x02]);
    }

    #[test]
    fn test_encode_application_constructed() {
        let tag = Asn1Tag::application(true, 0);
        let stream = tag.encode().unwrap();
        assert_eq!(stream.to_padded_bytes(), vec![0x60]);
    }

    #[test]
    fn test_encode_context_specific() {
        let tag = Asn1Tag::context_specific(true, 1);
        let stream = tag.encode().unwrap();
        assert_eq!(stream.to_padded_bytes(), vec![0xA1]);
    }

    #[test]
    fn test_encode_rejects_extended_tag_number() {
        let tag = Asn1Tag::private(false, 31);
        assert!(tag.encode().is_err());
    }

    #[test]
    fn test_tags_order_for_set_membership() {
        let mut tags = vec![
            Asn1Tag::context_specific(false, 1),
            Asn1Tag::universal(false, 2),
            Asn1Tag::context_specific(false, 0),
        ];
        tags.sort();
        assert_eq!(tags[0], Asn1Tag::universal(false, 2));
    }
}
