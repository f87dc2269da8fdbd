//! Data model for the quotedeck testimonial blocks.
//!
//! A block instance is a flat attribute record ([`BlockAttributes`]) whose
//! shape is declared by its variant's [`Schema`]. This crate owns the record
//! types, the three variant definitions with their defaults and seed data,
//! the normalization boundary that repairs loosely-typed host records, and
//! id/key generation for block instances and list items.

pub mod attributes;
pub mod error;
pub mod id;
pub mod schema;
pub mod variant;

pub use attributes::{
    fields, AttrValue, BackgroundStyle, BlockAttributes, FieldKind, IconRef, ItemField, MaxWidth,
    NestedSlot, TestimonialItem, TypographyRole,
};
pub use error::{SchemaError, SchemaResult};
pub use id::{next_instance_id, next_item_key};
pub use schema::{FieldSpec, Schema};
pub use variant::{AssetPaths, BlockMeta, BlockVariant, Capabilities, TextRole};
