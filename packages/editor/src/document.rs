//! # Block Document
//!
//! Core editing handle for one block instance.
//!
//! A BlockDocument pairs a variant with its attribute record and tracks
//! editing state (version, dirty flag). Records can be:
//! - **Fresh**: a newly inserted block with schema defaults
//! - **Loaded**: deserialized from the host store and normalized
//!
//! ## Lifecycle
//!
//! ```text
//! Insert/Load → Normalize → Edit → Evaluate → Persist
//!      ↓            ↓         ↓        ↓          ↓
//!   defaults     repaired  mutations  VDOM      JSON
//! ```
//!
//! Normalization runs at every boundary (load, edit entry, save entry), so
//! the record the editor mutates and the record the save path serializes
//! are always the same well-formed shape.

use crate::errors::EditorResult;
use crate::mutations::{Mutation, Outcome};
use quotedeck_evaluator::{BlockVdom, Evaluator, VNode};
use quotedeck_schema::{next_instance_id, BlockAttributes, BlockVariant};

/// Editable block instance
#[derive(Debug, Clone)]
pub struct BlockDocument {
    variant: BlockVariant,
    attributes: BlockAttributes,

    /// Current version number (increments on each applied mutation)
    version: u64,

    /// Unsaved changes since the last persist
    dirty: bool,
}

impl BlockDocument {
    /// Create a fresh instance with the variant's schema defaults.
    pub fn new(variant: BlockVariant) -> Self {
        Self {
            variant,
            attributes: variant.default_record(),
            version: 0,
            dirty: false,
        }
    }

    /// Load a persisted record. The load boundary: missing fields are
    /// backfilled, mistyped empty lists repaired, item keys regenerated.
    pub fn open(variant: BlockVariant, value: serde_json::Value) -> EditorResult<Self> {
        let attributes: BlockAttributes = serde_json::from_value(value)?;
        Ok(Self::from_attributes(variant, attributes))
    }

    /// Load a record persisted with its block name tag.
    pub fn open_named(block_name: &str, value: serde_json::Value) -> EditorResult<Self> {
        let variant = BlockVariant::from_block_name(block_name)?;
        Self::open(variant, value)
    }

    pub fn from_attributes(variant: BlockVariant, mut attributes: BlockAttributes) -> Self {
        variant.schema().normalize(&mut attributes);
        Self {
            variant,
            attributes,
            version: 0,
            dirty: false,
        }
    }

    pub fn variant(&self) -> BlockVariant {
        self.variant
    }

    pub fn attributes(&self) -> &BlockAttributes {
        &self.attributes
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The edit-entry boundary. Runs the one-shot lifecycle transitions:
    /// seed an empty first-load list, then assign the instance id if it is
    /// still unset. Safe to call on every editor mount; reapplication is
    /// ignored.
    pub fn edit(&mut self) {
        self.apply(&Mutation::Seed);
        if self.attributes.instance_id() == 0 {
            let id = next_instance_id();
            self.apply(&Mutation::AssignInstanceId { id });
        }
    }

    /// Apply a mutation. Version and dirty state move only when the record
    /// actually changed.
    pub fn apply(&mut self, mutation: &Mutation) -> Outcome {
        let outcome = mutation.apply(self.variant, &mut self.attributes);
        if outcome.is_applied() {
            self.version += 1;
            self.dirty = true;
        }
        outcome
    }

    /// Project the current record to its render description.
    pub fn evaluate(&self, evaluator: &Evaluator, nested: &[VNode]) -> BlockVdom {
        evaluator.evaluate(self.variant, &self.attributes, nested)
    }

    /// Serialize the record for the host store.
    pub fn to_value(&self) -> EditorResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.attributes)?)
    }

    /// Mark the current version as persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
