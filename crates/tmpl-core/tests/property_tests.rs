//! Precedence and determinism laws of materialization

use proptest::prelude::*;
use serde_json::Value;
use tmpl_core::{Catalog, MergePolicy, Overrides, TemplateKind};
use tmpl_meta::{OptionDescriptor, SchemaEntry, Template, ValueType};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z*_-]{0,8}".prop_map(Value::from),
    ]
}

fn catalog_with(default: Value, template_value: Value) -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .register_schema(SchemaEntry::new(TemplateKind::Lint).with_option(
            "key",
            OptionDescriptor::optional(ValueType::Any).with_default(default),
        ))
        .unwrap();
    catalog
        .register_template(Template::new("t", TemplateKind::Lint).with_value("key", template_value))
        .unwrap();
    catalog
}

proptest! {
    #[test]
    fn test_override_always_wins(default in scalar(), template_value in scalar(), override_value in scalar()) {
        let catalog = catalog_with(default, template_value);
        let overrides = Overrides::new().with("key", override_value.clone());

        for policy in [MergePolicy::Replace, MergePolicy::Deep] {
            let config = catalog.materialize_with("t", &overrides, policy).unwrap();
            prop_assert_eq!(&config.values["key"], &override_value);
        }
    }

    #[test]
    fn test_template_wins_without_override(default in scalar(), template_value in scalar()) {
        let catalog = catalog_with(default, template_value.clone());
        let config = catalog.materialize("t", &Overrides::new()).unwrap();
        prop_assert_eq!(&config.values["key"], &template_value);
    }

    #[test]
    fn test_materialize_is_deterministic(
        template_value in scalar(),
        extra in proptest::collection::btree_map("[a-z]{1,6}", scalar(), 0..6),
    ) {
        let catalog = catalog_with(Value::from("-"), template_value);
        let overrides = Overrides::from(extra);

        let first = catalog.materialize("t", &overrides).unwrap();
        let second = catalog.materialize("t", &overrides).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_keys_never_invalidate(
        extra in proptest::collection::btree_map("x-[a-z]{1,6}", scalar(), 0..6),
    ) {
        let catalog = catalog_with(Value::from("-"), Value::from("*"));
        let result = catalog.resolve("t", &Overrides::from(extra)).unwrap();
        prop_assert!(result.is_valid());
    }
}
