//! # Quotedeck Editor
//!
//! Core editing engine for quotedeck testimonial blocks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: attribute records + variants        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Open/persist attribute records           │
//! │  - Apply mutations with validation          │
//! │  - First-edit seeding + instance identity   │
//! │  - Undo/redo over mutation inverses         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: attributes → VDOM                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Attributes are source of truth**: The VDOM is a derived view
//! 2. **Validate then apply**: Invalid mutations are ignored, never partial
//! 3. **Structural edits**: Item-level operations, not text-level
//! 4. **Replayable history**: Every recorded mutation carries its inverse
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quotedeck_editor::{BlockDocument, BlockVariant, Evaluator, ItemField, Mutation};
//!
//! // Open a stored record (seeds defaults on first edit)
//! let mut doc = BlockDocument::open(BlockVariant::ListThree, stored)?;
//! doc.edit();
//!
//! // Apply a mutation
//! let mutation = Mutation::UpdateField {
//!     index: 0,
//!     field: ItemField::Author,
//!     value: "Ada Lovelace, Engineer".to_string(),
//! };
//! doc.apply(&mutation);
//!
//! // Evaluate to VDOM
//! let vdom = doc.evaluate(&Evaluator::default(), &[]);
//!
//! // Persist
//! let stored = doc.to_value()?;
//! ```

mod document;
mod errors;
mod mutations;
mod undo_stack;

pub use document::BlockDocument;
pub use errors::{EditorError, EditorResult};
pub use mutations::{Mutation, Outcome};
pub use undo_stack::{MutationBatch, UndoStack};

// Re-export common types for convenience
pub use quotedeck_evaluator::{BlockVdom, Evaluator, VNode};
pub use quotedeck_schema::{
    AttrValue, BlockAttributes, BlockVariant, ItemField, TestimonialItem,
};
