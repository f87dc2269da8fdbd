//! Comprehensive mutation tests

use quotedeck_editor::{AttrValue, BlockDocument, BlockVariant, ItemField, Mutation, TestimonialItem};
use quotedeck_schema::fields;

fn edited(variant: BlockVariant) -> BlockDocument {
    let mut doc = BlockDocument::new(variant);
    doc.edit();
    doc
}

#[test]
fn test_seed_populates_three_items_per_variant() {
    for variant in BlockVariant::ALL {
        let doc = edited(variant);
        assert_eq!(
            doc.attributes().items().len(),
            3,
            "{} should seed three testimonials",
            variant
        );
    }
}

#[test]
fn test_seed_applies_once() {
    let mut doc = edited(BlockVariant::ListThree);
    let before = doc.version();

    doc.edit();
    assert_eq!(doc.version(), before, "Second edit should be a no-op");

    // Deleting every item must not bring the samples back
    for _ in 0..3 {
        doc.apply(&Mutation::RemoveItem { index: 0 });
    }
    doc.edit();
    assert_eq!(doc.attributes().items().len(), 1);
    assert_eq!(doc.attributes().items()[0].testimonial, "New testimonial");
}

#[test]
fn test_removing_final_item_resets_to_default() {
    let mut doc = edited(BlockVariant::ListFour);

    // Delete past empty; the list floors at one fresh item
    for _ in 0..5 {
        doc.apply(&Mutation::RemoveItem { index: 0 });
    }

    let items = doc.attributes().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].author, "Karl Thomas / Photographer");
    assert!(!items[0].image_url.is_empty());
}

#[test]
fn test_add_item_assigns_unused_key() {
    let mut doc = edited(BlockVariant::ListThree);

    doc.apply(&Mutation::RemoveItem { index: 2 });
    assert!(doc.apply(&Mutation::AddItem).is_applied());

    let keys: Vec<u64> = doc.attributes().items().iter().map(|i| i.key).collect();
    assert_eq!(keys, vec![1, 2, 3]);

    assert!(doc.apply(&Mutation::AddItem).is_applied());
    let keys: Vec<u64> = doc.attributes().items().iter().map(|i| i.key).collect();
    assert_eq!(keys, vec![1, 2, 3, 4]);
}

#[test]
fn test_insert_item_at_bounds() {
    let mut doc = edited(BlockVariant::ListTwo);

    let first = TestimonialItem::new("First quote", "First Author").with_key(10);
    assert!(doc
        .apply(&Mutation::InsertItem {
            index: 0,
            item: first
        })
        .is_applied());
    assert_eq!(doc.attributes().items()[0].author, "First Author");

    let len = doc.attributes().items().len();
    let last = TestimonialItem::new("Last quote", "Last Author").with_key(11);
    assert!(doc
        .apply(&Mutation::InsertItem {
            index: len,
            item: last
        })
        .is_applied());
    assert_eq!(doc.attributes().items()[len].author, "Last Author");

    let past_end = TestimonialItem::new("Nope", "Nope").with_key(12);
    let outcome = doc.apply(&Mutation::InsertItem {
        index: doc.attributes().items().len() + 1,
        item: past_end,
    });
    assert!(!outcome.is_applied());
}

#[test]
fn test_replace_item_swaps_content() {
    let mut doc = edited(BlockVariant::ListThree);
    let replacement = TestimonialItem::new("Fresh words.", "Replacement Author").with_key(9);

    assert!(doc
        .apply(&Mutation::ReplaceItem {
            index: 1,
            item: replacement
        })
        .is_applied());

    let items = doc.attributes().items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].author, "Replacement Author");
    assert_eq!(items[0].author, "Nicolas Brown, Instructor");
    assert_eq!(items[2].author, "Maria Jonson, Student");
}

#[test]
fn test_update_field_is_copy_on_write() {
    let mut doc = edited(BlockVariant::ListThree);
    let snapshot = doc.attributes().items().to_vec();

    doc.apply(&Mutation::UpdateField {
        index: 0,
        field: ItemField::Testimonial,
        value: "Rewritten.".to_string(),
    });

    assert_eq!(snapshot[0].testimonial, "Nulla ante eros, venenatis vel male suada sit amet.");
    assert_eq!(doc.attributes().items()[0].testimonial, "Rewritten.");
}

#[test]
fn test_update_field_rejects_fields_outside_variant() {
    // The two-column layout has no item images
    let mut doc = edited(BlockVariant::ListTwo);

    let outcome = doc.apply(&Mutation::UpdateField {
        index: 0,
        field: ItemField::ImageUrl,
        value: "img.png".to_string(),
    });
    assert!(!outcome.is_applied());
}

#[test]
fn test_set_attribute_respects_the_schema() {
    let mut doc = edited(BlockVariant::ListThree);

    // Declared field with matching kind
    assert!(doc
        .apply(&Mutation::SetAttribute {
            name: fields::TESTIMONIAL_SIZE.to_string(),
            value: AttrValue::Number(28.0),
        })
        .is_applied());
    assert_eq!(doc.attributes().number(fields::TESTIMONIAL_SIZE), 28.0);

    // Kind mismatch
    let outcome = doc.apply(&Mutation::SetAttribute {
        name: fields::TESTIMONIAL_SIZE.to_string(),
        value: AttrValue::String("big".to_string()),
    });
    assert!(!outcome.is_applied());

    // Undeclared field
    let outcome = doc.apply(&Mutation::SetAttribute {
        name: "surpriseField".to_string(),
        value: AttrValue::Bool(true),
    });
    assert!(!outcome.is_applied());
    assert!(!doc.attributes().contains("surpriseField"));
}

#[test]
fn test_set_attribute_cannot_reach_guarded_fields() {
    let mut doc = edited(BlockVariant::ListThree);

    let outcome = doc.apply(&Mutation::SetAttribute {
        name: fields::ITEMS.to_string(),
        value: AttrValue::Items(Vec::new()),
    });
    assert!(!outcome.is_applied());
    assert_eq!(doc.attributes().items().len(), 3);

    let outcome = doc.apply(&Mutation::SetAttribute {
        name: fields::IS_FIRST_LOAD.to_string(),
        value: AttrValue::Bool(true),
    });
    assert!(!outcome.is_applied());
}

#[test]
fn test_version_counts_applied_mutations_only() {
    let mut doc = BlockDocument::new(BlockVariant::ListTwo);
    assert_eq!(doc.version(), 0);

    doc.edit(); // Seed + instance id
    assert_eq!(doc.version(), 2);

    doc.apply(&Mutation::RemoveItem { index: 99 });
    assert_eq!(doc.version(), 2);

    doc.apply(&Mutation::AddItem);
    assert_eq!(doc.version(), 3);
}

#[test]
fn test_instance_id_is_stable_after_assignment() {
    let mut doc = BlockDocument::new(BlockVariant::ListFour);
    doc.edit();

    let id = doc.attributes().instance_id();
    assert_ne!(id, 0);

    doc.edit();
    assert_eq!(doc.attributes().instance_id(), id);
}
