//! ASN.1 BER contracts layered on the berstream core
//!
//! This crate defines the wire-level classification types a schema-driven
//! encoder composes with: the [`Asn1TagClass`] 2-bit class enumeration, the
//! single-octet [`Asn1Tag`] identifier, definite-length [`BerLength`] octets,
//! and the [`SequenceComponent`] capability trait describing one field slot
//! of a SEQUENCE-like element.
//!
//! The tag and length types encode themselves into byte-aligned
//! [`BitStream`](berstream_core::BitStream) fragments so that a caller can
//! assemble full TLV units through a
//! [`PacketBuilder`](berstream_core::PacketBuilder). The composer itself
//! never interprets these types; it only copies the fragments they produce.

pub mod tag;
pub mod length;
pub mod component;

pub use tag::{Asn1Tag, Asn1TagClass};
pub use length::BerLength;
pub use component::SequenceComponent;

#[cfg(test)]
mod tests {
    use super::*;
    use berstream_core::{BitStream, PacketBuilder};

    #[test]
    fn test_compose_octet_string_tlv() {
        let tag = Asn1Tag::universal(false, 4); // OCTET STRING
        let length = BerLength::new(3);
        let mut value = BitStream::new();
        value.append_byte(0xCA);
        value.append_byte(0xFE);
        value.append_byte(0x42);
        value.set_begin_byte_aligned();

        let mut builder = PacketBuilder::new();
        builder
            .append_all([&tag.encode().unwrap(), &length.encode(), &value])
            .unwrap();

        assert_eq!(builder.bit_count(), 40);
        assert_eq!(
            builder.to_padded_bytes(),
            vec![0x04, 0x03, 0xCA, 0xFE, 0x42]
        );
    }

    #[test]
    fn test_compose_nested_constructed_tlv() {
        // Inner TLV: [0] IMPLICIT with a one-byte value.
        let mut inner = PacketBuilder::new();
        inner
            .append_all([
                &Asn1Tag::context_specific(false, 0).encode().unwrap(),
                &BerLength::new(1).encode(),
            ])
            .unwrap();
        let mut inner_value = BitStream::new();
        inner_value.append_byte(0x07);
        inner.append(&inner_value).unwrap();
        let inner_stream = inner.into_bit_stream();

        // Outer SEQUENCE wrapping the finished inner unit, recursion driven
        // by the caller.
        let inner_bytes = inner_stream.to_padded_bytes();
        let mut outer = PacketBuilder::new();
        outer
            .append_all([
                &Asn1Tag::universal(true, 16).encode().unwrap(),
                &BerLength::new(inner_bytes.len()).encode(),
                &inner_stream,
            ])
            .unwrap();

        assert_eq!(
            outer.to_padded_bytes(),
            vec![0x30, 0x03, 0x80, 0x01, 0x07]
        );
    }
}
