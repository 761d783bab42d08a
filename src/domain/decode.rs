//! Lenient discriminated-union decoding.
//!
//! The wire carries polymorphic objects whose concrete type is named by a
//! `type` field that may appear anywhere in the object. Decoding is two-pass:
//! the payload is buffered as a [`serde_json::Value`], the discriminator is
//! peeked, and the same buffered value is then handed to the decoder for the
//! selected variant.
//!
//! Unknown or absent discriminators are not errors. Each catalog supplies a
//! fallback decoder so that payloads from newer servers degrade instead of
//! failing on older clients.

use std::fmt;

use serde_json::Value;

use crate::config::DecodeSettings;
use crate::shared::error::DecodeError;

/// Field holding the discriminator unless a catalog overrides it.
pub const TYPE_FIELD: &str = "type";

/// A closed set of wire tags.
pub trait Discriminator: Copy + fmt::Debug + Sized {
    /// Resolve a wire tag; `None` for anything this version does not know.
    fn from_tag(tag: &str) -> Option<Self>;

    /// Wire tag for this discriminator.
    fn as_tag(&self) -> &'static str;
}

/// Outcome of peeking at an object's discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Peeked<D> {
    Known(D),
    Unknown(String),
    Absent,
}

/// Read the discriminator without consuming the value.
///
/// A non-string discriminator is treated as unknown, a `null` one as absent.
pub fn peek_discriminator<D: Discriminator>(value: &Value, field: &str) -> Peeked<D> {
    match value.get(field) {
        Some(Value::String(tag)) => match D::from_tag(tag) {
            Some(known) => Peeked::Known(known),
            None => Peeked::Unknown(tag.clone()),
        },
        None | Some(Value::Null) => Peeked::Absent,
        Some(other) => Peeked::Unknown(other.to_string()),
    }
}

/// A sum type decoded by dispatching on a discriminator.
pub trait Polymorphic: Sized {
    type Tag: Discriminator;

    /// Catalog name used in errors and logs.
    const CATALOG: &'static str;

    /// Field holding the discriminator.
    const TAG_FIELD: &'static str = TYPE_FIELD;

    /// Decode `value` as the variant selected by `tag`.
    fn decode_as(tag: Self::Tag, value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError>;

    /// Decode `value` when its discriminator is unknown or absent.
    fn decode_fallback(value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError>;

    /// Name of the fallback, for logs.
    fn fallback_name() -> &'static str;
}

/// Per-call decoding state: settings, current depth, and fallback count.
///
/// Every top-level decode owns its context, so decoding is re-entrant and
/// shares nothing across calls.
#[derive(Debug, Clone)]
pub struct DecodeContext {
    settings: DecodeSettings,
    depth: usize,
    fallbacks: usize,
}

impl DecodeContext {
    pub fn new(settings: DecodeSettings) -> Self {
        Self {
            settings,
            depth: 0,
            fallbacks: 0,
        }
    }

    pub fn settings(&self) -> &DecodeSettings {
        &self.settings
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of unknown discriminators resolved through a fallback so far.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// Run `f` one level deeper, failing once the configured limit is hit.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        if self.depth >= self.settings.max_depth {
            return Err(DecodeError::TooDeep {
                limit: self.settings.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn record_fallback(&mut self, catalog: &'static str, tag: &str, fallback: &'static str) {
        self.fallbacks += 1;
        if self.settings.warn_on_fallback {
            tracing::warn!(catalog, tag, fallback, "Unknown discriminator, using fallback");
        } else {
            tracing::debug!(catalog, tag, fallback, "Unknown discriminator, using fallback");
        }
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new(DecodeSettings::default())
    }
}

/// Peek the discriminator of `value` and decode it as the selected variant.
pub fn decode_polymorphic<T: Polymorphic>(
    value: Value,
    cx: &mut DecodeContext,
) -> Result<T, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::NotAnObject {
            variant: T::CATALOG,
        });
    }

    let peeked = peek_discriminator::<T::Tag>(&value, T::TAG_FIELD);
    cx.nested(|cx| match peeked {
        Peeked::Known(tag) => T::decode_as(tag, value, cx),
        Peeked::Unknown(tag) => {
            cx.record_fallback(T::CATALOG, &tag, T::fallback_name());
            T::decode_fallback(value, cx)
        }
        Peeked::Absent => T::decode_fallback(value, cx),
    })
}

/// Decode with default settings.
pub fn decode<T: Polymorphic>(value: Value) -> Result<T, DecodeError> {
    decode_polymorphic(value, &mut DecodeContext::default())
}

/// Parse JSON text and decode with default settings.
pub fn decode_str<T: Polymorphic>(json: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    decode(value)
}
