//! # Record Mutations
//!
//! High-level semantic operations on block attribute records.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one editing gesture
//! 2. **Validated**: Every mutation checks its precondition before touching
//!    the record; a failed precondition is an [`Outcome::Ignored`], never an
//!    error or a partial write
//! 3. **Pure**: Application is a function of (variant, record, mutation) -
//!    ids and keys are carried in the mutation or computed from the record
//! 4. **Invertible**: User mutations know their inverse, computed against
//!    the record *before* application, for undo support
//!
//! ## Mutation Semantics
//!
//! ### Seed / AssignInstanceId
//! - One-shot lifecycle transitions; reapplication is ignored
//! - Not undoable (they establish the baseline undo operates on)
//!
//! ### RemoveItem
//! - Removing from a list of two or more deletes the entry
//! - Removing the only entry replaces it with a fresh default instead;
//!   the list is never left empty

use quotedeck_schema::{
    fields, next_item_key, AttrValue, BlockAttributes, BlockVariant, ItemField, TestimonialItem,
};
use serde::{Deserialize, Serialize};

/// What applying a mutation did to the record.
///
/// `Ignored` is the silent-guard path: out-of-range indices, fields the
/// variant does not carry, already-run lifecycle transitions. The record is
/// untouched and no version change should be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Semantic mutations over one block's attribute record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Replace an empty first-load item list with the variant's seed
    /// entries and clear the first-load flag
    Seed,

    /// Assign the one-time instance id that scopes generated CSS classes.
    /// The id is generated by the caller so application stays replayable.
    AssignInstanceId { id: u64 },

    /// Append a fresh default item with a key distinct from every existing
    /// key
    AddItem,

    /// Insert a prepared item at index (undo carrier for RemoveItem)
    InsertItem { index: usize, item: TestimonialItem },

    /// Replace the item at index wholesale (undo carrier for the
    /// singleton-remove refill)
    ReplaceItem { index: usize, item: TestimonialItem },

    /// Replace one editable text field of the item at index
    UpdateField {
        index: usize,
        field: ItemField,
        value: String,
    },

    /// Remove the item at index; a singleton list is refilled with a fresh
    /// default instead
    RemoveItem { index: usize },

    /// Replace one schema attribute wholesale (the inspector-panel path)
    SetAttribute { name: String, value: AttrValue },
}

/// List state is owned by the dedicated item mutations; routing it through
/// SetAttribute would bypass their invariants.
const GUARDED_FIELDS: &[&str] = &[fields::ITEMS, fields::IS_FIRST_LOAD, fields::BLOCK_UNIQ_ID];

impl Mutation {
    /// Check the precondition without touching the record.
    pub fn validate(&self, variant: BlockVariant, attrs: &BlockAttributes) -> Outcome {
        let ok = match self {
            Mutation::Seed => attrs.items().is_empty() && attrs.is_first_load(),
            Mutation::AssignInstanceId { id } => attrs.instance_id() == 0 && *id != 0,
            Mutation::AddItem => true,
            Mutation::InsertItem { index, .. } => *index <= attrs.items().len(),
            Mutation::ReplaceItem { index, .. } => *index < attrs.items().len(),
            Mutation::UpdateField { index, field, .. } => {
                *index < attrs.items().len() && variant.item_fields().contains(field)
            }
            Mutation::RemoveItem { index } => *index < attrs.items().len(),
            Mutation::SetAttribute { name, value } => {
                !GUARDED_FIELDS.contains(&name.as_str())
                    && variant
                        .schema()
                        .field(name)
                        .map(|spec| spec.kind == value.kind())
                        .unwrap_or(false)
            }
        };
        if ok {
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }

    /// Apply the mutation to the record. The record is replaced wholesale
    /// on success and untouched on [`Outcome::Ignored`].
    pub fn apply(&self, variant: BlockVariant, attrs: &mut BlockAttributes) -> Outcome {
        if !self.validate(variant, attrs).is_applied() {
            return Outcome::Ignored;
        }

        match self {
            Mutation::Seed => {
                attrs.set_items(variant.seed_items());
                attrs.set(fields::IS_FIRST_LOAD, false.into());
            }

            Mutation::AssignInstanceId { id } => {
                attrs.set_instance_id(*id);
            }

            Mutation::AddItem => {
                let items = attrs.items();
                let item = Self::fresh_item(variant, items, items.len());
                attrs.items_mut().push(item);
            }

            Mutation::InsertItem { index, item } => {
                attrs.items_mut().insert(*index, item.clone());
            }

            Mutation::ReplaceItem { index, item } => {
                attrs.items_mut()[*index] = item.clone();
            }

            Mutation::UpdateField {
                index,
                field,
                value,
            } => {
                let updated = attrs.items()[*index].clone().with_field(*field, value.clone());
                attrs.items_mut()[*index] = updated;
            }

            Mutation::RemoveItem { index } => {
                let items = attrs.items();
                if items.len() == 1 {
                    let fresh = Self::fresh_item(variant, items, 0);
                    attrs.set_items(vec![fresh]);
                } else {
                    attrs.items_mut().remove(*index);
                }
            }

            Mutation::SetAttribute { name, value } => {
                attrs.set(name.clone(), value.clone());
            }
        }

        Outcome::Applied
    }

    /// The inverse mutation, computed against the record as it stands
    /// *before* this mutation is applied.
    ///
    /// `None` means the mutation is not undoable: lifecycle transitions,
    /// or a precondition that fails anyway.
    pub fn inverse(&self, variant: BlockVariant, attrs: &BlockAttributes) -> Option<Mutation> {
        if !self.validate(variant, attrs).is_applied() {
            return None;
        }

        match self {
            Mutation::Seed | Mutation::AssignInstanceId { .. } => None,

            Mutation::AddItem => Some(Mutation::RemoveItem {
                index: attrs.items().len(),
            }),

            Mutation::InsertItem { index, .. } => Some(Mutation::RemoveItem { index: *index }),

            Mutation::ReplaceItem { index, .. } => Some(Mutation::ReplaceItem {
                index: *index,
                item: attrs.items()[*index].clone(),
            }),

            Mutation::UpdateField { index, field, .. } => Some(Mutation::UpdateField {
                index: *index,
                field: *field,
                value: attrs.items()[*index].field(*field).to_string(),
            }),

            Mutation::RemoveItem { index } => {
                let items = attrs.items();
                if items.len() == 1 {
                    Some(Mutation::ReplaceItem {
                        index: 0,
                        item: items[0].clone(),
                    })
                } else {
                    Some(Mutation::InsertItem {
                        index: *index,
                        item: items[*index].clone(),
                    })
                }
            }

            Mutation::SetAttribute { name, .. } => attrs.get(name).map(|old| {
                Mutation::SetAttribute {
                    name: name.clone(),
                    value: old.clone(),
                }
            }),
        }
    }

    /// A variant default item with a fresh key; variants with per-item
    /// photos get the bundled sample for `position`.
    fn fresh_item(
        variant: BlockVariant,
        existing: &[TestimonialItem],
        position: usize,
    ) -> TestimonialItem {
        let mut item = variant.default_item().with_key(next_item_key(existing));
        if variant.item_fields().contains(&ItemField::ImageUrl) {
            item.image_url = variant.sample_image_path(position);
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(variant: BlockVariant) -> BlockAttributes {
        variant.default_record()
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateField {
            index: 1,
            field: ItemField::Author,
            value: "Ema Ducon, Student".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_seed_runs_once() {
        let mut attrs = fresh(BlockVariant::ListThree);
        assert_eq!(
            Mutation::Seed.apply(BlockVariant::ListThree, &mut attrs),
            Outcome::Applied
        );
        assert_eq!(attrs.items().len(), 3);
        assert!(!attrs.is_first_load());

        // Precondition now fails both ways it can fail
        assert_eq!(
            Mutation::Seed.apply(BlockVariant::ListThree, &mut attrs),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_seed_does_not_resurrect_an_emptied_list() {
        let mut attrs = fresh(BlockVariant::ListTwo);
        Mutation::Seed.apply(BlockVariant::ListTwo, &mut attrs);
        // Simulate a record whose items were later emptied by the host;
        // first-load is spent, so seeding must not run again.
        attrs.set_items(Vec::new());
        assert_eq!(
            Mutation::Seed.apply(BlockVariant::ListTwo, &mut attrs),
            Outcome::Ignored
        );
        assert!(attrs.items().is_empty());
    }

    #[test]
    fn test_assign_instance_id_is_one_shot() {
        let mut attrs = fresh(BlockVariant::ListTwo);
        let assign = Mutation::AssignInstanceId { id: 1000 };
        assert_eq!(
            assign.apply(BlockVariant::ListTwo, &mut attrs),
            Outcome::Applied
        );
        assert_eq!(attrs.instance_id(), 1000);

        let again = Mutation::AssignInstanceId { id: 2000 };
        assert_eq!(
            again.apply(BlockVariant::ListTwo, &mut attrs),
            Outcome::Ignored
        );
        assert_eq!(attrs.instance_id(), 1000);
    }

    #[test]
    fn test_add_item_uses_fresh_keys() {
        let mut attrs = fresh(BlockVariant::ListThree);
        Mutation::Seed.apply(BlockVariant::ListThree, &mut attrs);

        Mutation::AddItem.apply(BlockVariant::ListThree, &mut attrs);
        let items = attrs.items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].key, 4);
        assert_eq!(items[3].testimonial, "New testimonial");
        assert!(items[3].image_url.ends_with("testimonial-img-1.png"));

        // Keys never collide even after removals
        Mutation::RemoveItem { index: 0 }.apply(BlockVariant::ListThree, &mut attrs);
        Mutation::AddItem.apply(BlockVariant::ListThree, &mut attrs);
        let keys: Vec<u64> = attrs.items().iter().map(|i| i.key).collect();
        assert_eq!(keys, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_add_item_list_two_has_no_image() {
        let mut attrs = fresh(BlockVariant::ListTwo);
        Mutation::Seed.apply(BlockVariant::ListTwo, &mut attrs);
        Mutation::AddItem.apply(BlockVariant::ListTwo, &mut attrs);
        assert_eq!(attrs.items()[3].image_url, "");
    }

    #[test]
    fn test_update_field_out_of_range_is_ignored() {
        let mut attrs = fresh(BlockVariant::ListThree);
        Mutation::Seed.apply(BlockVariant::ListThree, &mut attrs);

        let bad = Mutation::UpdateField {
            index: 9,
            field: ItemField::Author,
            value: "nobody".to_string(),
        };
        assert_eq!(bad.apply(BlockVariant::ListThree, &mut attrs), Outcome::Ignored);
        assert_eq!(attrs.items()[0].author, "Nicolas Brown, Instructor");
    }

    #[test]
    fn test_update_field_unknown_to_variant_is_ignored() {
        let mut attrs = fresh(BlockVariant::ListTwo);
        Mutation::Seed.apply(BlockVariant::ListTwo, &mut attrs);

        // List-2 items carry no image fields
        let bad = Mutation::UpdateField {
            index: 0,
            field: ItemField::ImageUrl,
            value: "photo.png".to_string(),
        };
        assert_eq!(bad.apply(BlockVariant::ListTwo, &mut attrs), Outcome::Ignored);
    }

    #[test]
    fn test_remove_item_keeps_order_of_the_rest() {
        let mut attrs = fresh(BlockVariant::ListThree);
        Mutation::Seed.apply(BlockVariant::ListThree, &mut attrs);

        Mutation::RemoveItem { index: 1 }.apply(BlockVariant::ListThree, &mut attrs);
        let authors: Vec<&str> = attrs.items().iter().map(|i| i.author.as_str()).collect();
        assert_eq!(authors, vec!["Nicolas Brown, Instructor", "Maria Jonson, Student"]);
        let keys: Vec<u64> = attrs.items().iter().map(|i| i.key).collect();
        assert_eq!(keys, vec![1, 3]);
    }

    #[test]
    fn test_remove_last_item_refills_with_default() {
        let mut attrs = fresh(BlockVariant::ListThree);
        Mutation::Seed.apply(BlockVariant::ListThree, &mut attrs);
        Mutation::RemoveItem { index: 0 }.apply(BlockVariant::ListThree, &mut attrs);
        Mutation::RemoveItem { index: 0 }.apply(BlockVariant::ListThree, &mut attrs);
        assert_eq!(attrs.items().len(), 1);

        // Removing the only item refills rather than emptying
        Mutation::RemoveItem { index: 0 }.apply(BlockVariant::ListThree, &mut attrs);
        let items = attrs.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].testimonial, "New testimonial");
        assert_eq!(items[0].author, "John Doe");
        assert_eq!(items[0].key, 4, "refill key is above the removed one");
    }

    #[test]
    fn test_set_attribute_respects_schema() {
        let mut attrs = fresh(BlockVariant::ListThree);

        let set = Mutation::SetAttribute {
            name: fields::CONTAINER_PADDING.to_string(),
            value: AttrValue::Number(80.0),
        };
        assert_eq!(set.apply(BlockVariant::ListThree, &mut attrs), Outcome::Applied);
        assert_eq!(attrs.number(fields::CONTAINER_PADDING), 80.0);

        // Kind mismatch
        let bad_kind = Mutation::SetAttribute {
            name: fields::CONTAINER_PADDING.to_string(),
            value: AttrValue::String("80".to_string()),
        };
        assert_eq!(
            bad_kind.apply(BlockVariant::ListThree, &mut attrs),
            Outcome::Ignored
        );

        // Unknown name
        let unknown = Mutation::SetAttribute {
            name: "nope".to_string(),
            value: AttrValue::Number(1.0),
        };
        assert_eq!(
            unknown.apply(BlockVariant::ListThree, &mut attrs),
            Outcome::Ignored
        );

        // List state is not reachable through this path
        let guarded = Mutation::SetAttribute {
            name: fields::IS_FIRST_LOAD.to_string(),
            value: AttrValue::Bool(true),
        };
        assert_eq!(
            guarded.apply(BlockVariant::ListThree, &mut attrs),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_inverses_round_trip() {
        let mut attrs = fresh(BlockVariant::ListThree);
        Mutation::Seed.apply(BlockVariant::ListThree, &mut attrs);
        let baseline = attrs.clone();

        let cases = vec![
            Mutation::AddItem,
            Mutation::UpdateField {
                index: 2,
                field: ItemField::Testimonial,
                value: "Edited.".to_string(),
            },
            Mutation::RemoveItem { index: 1 },
            Mutation::SetAttribute {
                name: fields::TEXT_COLOR.to_string(),
                value: AttrValue::String("#123456".to_string()),
            },
        ];

        for mutation in cases {
            let mut attrs = baseline.clone();
            let inverse = mutation.inverse(BlockVariant::ListThree, &attrs).unwrap();
            assert_eq!(
                mutation.apply(BlockVariant::ListThree, &mut attrs),
                Outcome::Applied
            );
            assert_eq!(
                inverse.apply(BlockVariant::ListThree, &mut attrs),
                Outcome::Applied
            );
            assert_eq!(attrs, baseline, "inverse failed for {:?}", mutation);
        }
    }

    #[test]
    fn test_singleton_remove_inverse_restores_original() {
        let mut attrs = fresh(BlockVariant::ListTwo);
        Mutation::Seed.apply(BlockVariant::ListTwo, &mut attrs);
        Mutation::RemoveItem { index: 0 }.apply(BlockVariant::ListTwo, &mut attrs);
        Mutation::RemoveItem { index: 0 }.apply(BlockVariant::ListTwo, &mut attrs);
        let baseline = attrs.clone();

        let remove = Mutation::RemoveItem { index: 0 };
        let inverse = remove.inverse(BlockVariant::ListTwo, &attrs).unwrap();
        remove.apply(BlockVariant::ListTwo, &mut attrs);
        assert_eq!(attrs.items()[0].testimonial, "New testimonial");

        inverse.apply(BlockVariant::ListTwo, &mut attrs);
        assert_eq!(attrs, baseline);
    }

    #[test]
    fn test_lifecycle_mutations_are_not_undoable() {
        let attrs = fresh(BlockVariant::ListFour);
        assert!(Mutation::Seed.inverse(BlockVariant::ListFour, &attrs).is_none());
        assert!(Mutation::AssignInstanceId { id: 7 }
            .inverse(BlockVariant::ListFour, &attrs)
            .is_none());
    }

    #[test]
    fn test_copy_on_write_isolation() {
        let mut attrs = fresh(BlockVariant::ListThree);
        Mutation::Seed.apply(BlockVariant::ListThree, &mut attrs);
        let snapshot = attrs.clone();

        Mutation::UpdateField {
            index: 0,
            field: ItemField::Testimonial,
            value: "Changed.".to_string(),
        }
        .apply(BlockVariant::ListThree, &mut attrs);

        assert_eq!(
            snapshot.items()[0].testimonial,
            "Nulla ante eros, venenatis vel male suada sit amet."
        );
        assert_eq!(attrs.items()[0].testimonial, "Changed.");
        assert_eq!(attrs.items()[0].key, snapshot.items()[0].key);
    }
}
