//! Sequence field-slot capability contract

use crate::tag::Asn1Tag;
use berstream_core::{BerResult, BitStream};

#[cfg(test)]
use mockall::automock;

/// Capability contract for one field slot of a SEQUENCE-like element.
///
/// A schema-driven encoder walks its components through this trait to decide,
/// per field, whether to emit it and in which tag form. The composition core
/// never interprets these answers itself; it only merges the fragments the
/// chosen components produce. Consumers must operate purely through the trait
/// object and never inspect concrete component identity.
#[cfg_attr(test, automock)]
pub trait SequenceComponent {
    /// Whether a value was explicitly set by the caller.
    fn is_explicitly_set(&self) -> bool;

    /// Whether the slot carries a schema default.
    fn has_default_value(&self) -> bool;

    /// Whether the slot is OPTIONAL.
    fn is_optional(&self) -> bool;

    /// Whether the slot uses implicit tagging, overriding the underlying
    /// type's default tag.
    fn is_implicit_tagging(&self) -> bool;

    /// The set of tags that could legally open this slot's encoding.
    fn possible_first_tags(&self) -> Vec<Asn1Tag>;

    /// The element value, surfaced as the fragment its own encoder produces.
    ///
    /// # Errors
    /// Propagates whatever the element's encoder signals.
    fn encode_value(&self) -> BerResult<BitStream>;

    /// Debug-oriented indented rendering of the slot.
    fn to_indented_string(&self, indent: usize) -> String;
}
