//! # Undo/Redo Stack
//!
//! Tracks mutation history over a block document and enables undo/redo.
//!
//! ## Design
//!
//! - Each mutation records its inverse before being applied
//! - Undo applies the inverse and moves the entry to the redo stack
//! - Redo reapplies the original mutation
//! - New mutations clear the redo stack
//! - Supports batched operations (the "no width restriction" control, for
//!   example, writes both the flag and the max width as one undo step)
//! - Lifecycle mutations (seeding, instance-id assignment) have no inverse
//!   and are never recorded
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut doc = BlockDocument::new(BlockVariant::ListThree);
//! doc.edit();
//! let mut stack = UndoStack::new();
//!
//! stack.apply(&Mutation::AddItem, &mut doc);
//! stack.undo(&mut doc);
//! stack.redo(&mut doc);
//! ```

use crate::document::BlockDocument;
use crate::mutations::{Mutation, Outcome};

/// A group of mutations undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// The inverse mutations (in reverse order for undo)
    pub inverses: Vec<Mutation>,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl MutationBatch {
    pub fn single(mutation: Mutation, inverse: Mutation) -> Self {
        Self {
            mutations: vec![mutation],
            inverses: vec![inverse],
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Undo/redo stack for block editing
#[derive(Debug, Default)]
pub struct UndoStack {
    /// Applied mutations, most recent last
    undo_stack: Vec<MutationBatch>,

    /// Undone mutations, most recent last
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<MutationBatch>,
}

impl UndoStack {
    /// Create a new undo stack with the default depth (100 levels).
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation through the document and record it for undo.
    ///
    /// Ignored mutations and mutations without an inverse leave the history
    /// untouched.
    pub fn apply(&mut self, mutation: &Mutation, doc: &mut BlockDocument) -> Outcome {
        // Inverse must be computed against the pre-application record
        let inverse = mutation.inverse(doc.variant(), doc.attributes());

        let outcome = doc.apply(mutation);
        if !outcome.is_applied() {
            return outcome;
        }

        if let Some(inverse) = inverse {
            if let Some(batch) = &mut self.current_batch {
                batch.mutations.push(mutation.clone());
                batch.inverses.insert(0, inverse); // Inverses run in reverse order
            } else {
                self.push_batch(MutationBatch::single(mutation.clone(), inverse));
            }
        }

        outcome
    }

    /// Start a batch of mutations (undone/redone together).
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(MutationBatch {
            mutations: Vec::new(),
            inverses: Vec::new(),
            description: None,
        });
    }

    /// End the current batch and push it to the undo stack.
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.mutations.is_empty() {
                self.push_batch(batch);
            }
        }
    }

    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates the redone future
        self.redo_stack.clear();
    }

    /// Undo the most recent batch. Returns false when there is nothing to
    /// undo.
    pub fn undo(&mut self, doc: &mut BlockDocument) -> bool {
        if let Some(batch) = self.undo_stack.pop() {
            for inverse in &batch.inverses {
                doc.apply(inverse);
            }
            self.redo_stack.push(batch);
            true
        } else {
            false
        }
    }

    /// Redo the most recently undone batch. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self, doc: &mut BlockDocument) -> bool {
        if let Some(batch) = self.redo_stack.pop() {
            for mutation in &batch.mutations {
                doc.apply(mutation);
            }
            self.undo_stack.push(batch);
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}
