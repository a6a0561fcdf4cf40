//! Core bit-level building blocks for BER encoding
//!
//! This crate provides the bit-granular output buffer ([`BitStream`]) and the
//! fragment compositor ([`PacketBuilder`]) used to assemble BER/DER-style
//! tag-length-value units. Both types are single-threaded, append-only
//! builders: callers bit-encode each logical field into its own `BitStream`,
//! then merge the fragments in wire order through a `PacketBuilder`.

pub mod error;
pub mod bitstream;
pub mod packet;

pub use error::{BerError, BerResult};
pub use bitstream::BitStream;
pub use packet::PacketBuilder;
