use crate::attributes::{fields, AttrValue, BlockAttributes, FieldKind};
use crate::id::next_item_key;

/// Declares one attribute: its name, semantic kind and default value.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: AttrValue,
}

impl FieldSpec {
    pub fn new(name: &'static str, default: AttrValue) -> Self {
        Self {
            name,
            kind: default.kind(),
            default,
        }
    }
}

/// The attribute schema of one block variant.
///
/// A schema is the complete list of fields a variant persists. It is the
/// source of truth for defaults and for [`Schema::normalize`], the one
/// boundary where loosely-typed host records become well-formed.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// A fresh record holding every field at its declared default.
    pub fn default_record(&self) -> BlockAttributes {
        let mut attrs = BlockAttributes::new();
        for field in &self.fields {
            attrs.set(field.name, field.default.clone());
        }
        attrs
    }

    /// Bring a loaded record into well-formed shape.
    ///
    /// Three repairs, applied in place:
    /// - missing declared fields are backfilled with their defaults;
    /// - empty lists are re-typed to the declared list kind (an empty JSON
    ///   array carries no tag, so deserialization cannot tell items from
    ///   typography);
    /// - items with an unassigned key get fresh keys above the current max.
    ///
    /// Undeclared fields are left untouched. Every load boundary calls this
    /// exactly once before the record is used.
    pub fn normalize(&self, attrs: &mut BlockAttributes) {
        for field in &self.fields {
            match attrs.get(field.name) {
                None => attrs.set(field.name, field.default.clone()),
                Some(value) => {
                    if value.kind() != field.kind && value.is_empty_list() {
                        attrs.set(field.name, field.default.clone());
                    }
                }
            }
        }
        self.assign_missing_keys(attrs);
    }

    fn assign_missing_keys(&self, attrs: &mut BlockAttributes) {
        if self.field(fields::ITEMS).is_none() {
            return;
        }
        let mut next = next_item_key(attrs.items());
        let items = attrs.items_mut();
        for item in items.iter_mut() {
            if item.key == 0 {
                item.key = next;
                next += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::TestimonialItem;

    fn toy_schema() -> Schema {
        Schema::new(vec![
            FieldSpec::new(fields::CONTAINER_MAX_WIDTH, "1170".into()),
            FieldSpec::new(fields::CONTAINER_PADDING, 58.0.into()),
            FieldSpec::new(fields::ITEMS, AttrValue::Items(Vec::new())),
            FieldSpec::new(fields::TYPOGRAPHY, AttrValue::Typography(Vec::new())),
        ])
    }

    #[test]
    fn test_default_record_carries_every_field() {
        let record = toy_schema().default_record();
        assert_eq!(record.string(fields::CONTAINER_MAX_WIDTH), "1170");
        assert_eq!(record.number(fields::CONTAINER_PADDING), 58.0);
        assert!(record.items().is_empty());
    }

    #[test]
    fn test_normalize_backfills_missing_fields() {
        let schema = toy_schema();
        let mut attrs = BlockAttributes::new();
        attrs.set(fields::CONTAINER_PADDING, 20.0.into());
        schema.normalize(&mut attrs);
        assert_eq!(attrs.number(fields::CONTAINER_PADDING), 20.0);
        assert_eq!(attrs.string(fields::CONTAINER_MAX_WIDTH), "1170");
    }

    #[test]
    fn test_normalize_retypes_empty_lists() {
        let schema = toy_schema();
        // An empty JSON array deserializes as the first list-bearing
        // variant, which may not be the declared kind.
        let mut attrs: BlockAttributes =
            serde_json::from_value(serde_json::json!({ "typography": [] })).unwrap();
        schema.normalize(&mut attrs);
        assert!(attrs.typography().is_empty());
        assert!(matches!(
            attrs.get(fields::TYPOGRAPHY),
            Some(AttrValue::Typography(_))
        ));
    }

    #[test]
    fn test_normalize_leaves_undeclared_fields_alone() {
        let schema = toy_schema();
        let mut attrs = BlockAttributes::new();
        attrs.set("customField", "kept".into());
        schema.normalize(&mut attrs);
        assert_eq!(attrs.string("customField"), "kept");
    }

    #[test]
    fn test_normalize_assigns_keys_above_current_max() {
        let schema = toy_schema();
        let mut attrs = BlockAttributes::new();
        attrs.set_items(vec![
            TestimonialItem::new("a", "A").with_key(5),
            TestimonialItem::new("b", "B"),
            TestimonialItem::new("c", "C"),
        ]);
        schema.normalize(&mut attrs);
        let keys: Vec<u64> = attrs.items().iter().map(|i| i.key).collect();
        assert_eq!(keys, vec![5, 6, 7]);
    }
}
