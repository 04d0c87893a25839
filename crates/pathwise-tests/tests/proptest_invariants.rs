//! Property-based invariant tests for Pathwise using proptest.
//!
//! These tests verify that path resolution, expansion, and validation never
//! panic and hold their structural invariants for arbitrary inputs,
//! including typed text that resolves to nothing.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pathwise-tests --test proptest_invariants
//! ```

use proptest::prelude::*;

use pathwise_schema::{
    expand_paths, path_parts, resolve, search_options, sort_options, validate_schema,
    visible_results, EntityDefinition, EntitySchema, ErrorCode, ExpandContext, PathOption,
    Property, Relation, PRICE_FIELDS,
};
use pathwise_tests::fixtures::catalog_schema;

/// Strategy for dotted path text a user might type, resolvable or not.
fn typed_path_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_.]{0,40}").unwrap().boxed()
}

/// Strategy for short ISO-style context code lists.
fn code_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-zA-Z\\-]{1,6}").unwrap(), 0..4)
}

// ============================================================================
// 1. Descent Invariants
// ============================================================================

proptest! {
    /// Arbitrary typed paths never panic during resolution.
    #[test]
    fn resolve_never_panics(typed in typed_path_strategy()) {
        let schema = catalog_schema();
        let _ = resolve(&schema, "product", &typed);
        let _ = resolve(&schema, "no_such_entity", &typed);
    }

    /// path_parts drops exactly the trailing partial segment.
    #[test]
    fn path_parts_drops_exactly_one_segment(typed in typed_path_strategy()) {
        let parts = path_parts(&typed);
        prop_assert_eq!(parts.len(), typed.split('.').count() - 1);
    }

    /// The consumed prefix is always a prefix of the typed text.
    #[test]
    fn resolved_prefix_never_exceeds_typed(typed in typed_path_strategy()) {
        let schema = catalog_schema();
        let cursor = resolve(&schema, "product", &typed).unwrap();
        prop_assert!(
            typed.starts_with(&cursor.prefix),
            "prefix '{}' is not a prefix of '{}'", cursor.prefix, typed
        );
    }

    /// Every emitted option strictly extends the consumed prefix.
    #[test]
    fn options_extend_resolved_prefix(typed in typed_path_strategy()) {
        let schema = catalog_schema();
        let cursor = resolve(&schema, "product", &typed).unwrap();
        for option in expand_paths(&schema, "product", &typed, &ExpandContext::new()) {
            prop_assert!(option.value.starts_with(&cursor.prefix));
            prop_assert!(option.value.len() > cursor.prefix.len());
        }
    }
}

// ============================================================================
// 2. Expansion Invariants
// ============================================================================

proptest! {
    /// Labels always mirror values, whatever the context.
    #[test]
    fn labels_mirror_values(
        typed in typed_path_strategy(),
        currencies in code_list_strategy(),
        languages in code_list_strategy(),
    ) {
        let schema = catalog_schema();
        let ctx = ExpandContext::new().currencies(currencies).languages(languages);
        for option in expand_paths(&schema, "product", &typed, &ctx) {
            prop_assert_eq!(&option.label, &option.value);
        }
    }

    /// The price group yields one option per currency key and sub-field.
    #[test]
    fn price_options_scale_with_currencies(currencies in code_list_strategy()) {
        let schema = catalog_schema();
        let expected_keys = if currencies.is_empty() { 1 } else { currencies.len() };
        let ctx = ExpandContext::new().currencies(currencies);

        let options = expand_paths(&schema, "product", "", &ctx);
        let price_count = options
            .iter()
            .filter(|o| o.value.starts_with("price."))
            .count();

        prop_assert_eq!(price_count, expected_keys * PRICE_FIELDS.len());
    }

    /// The translated group yields one option per language key and
    /// translated field.
    #[test]
    fn translation_options_scale_with_languages(languages in code_list_strategy()) {
        let schema = catalog_schema();
        let expected_keys = if languages.is_empty() { 1 } else { languages.len() };
        let ctx = ExpandContext::new().languages(languages);

        let options = expand_paths(&schema, "product", "", &ctx);
        let translation_count = options
            .iter()
            .filter(|o| o.value.starts_with("translations."))
            .count();

        // product_translation carries a single translated field
        prop_assert_eq!(translation_count, expected_keys);
    }

    /// Consumed group names never resurface as a leaf segment.
    #[test]
    fn consumed_groups_never_surface(
        typed in typed_path_strategy(),
        languages in code_list_strategy(),
    ) {
        let schema = catalog_schema();
        let ctx = ExpandContext::new().languages(languages);
        for option in expand_paths(&schema, "product", &typed, &ctx) {
            let leaf = option.value.rsplit('.').next().unwrap();
            prop_assert!(
                !["translations", "visibilities", "price"].contains(&leaf),
                "consumed group resurfaced as '{}'", option.value
            );
        }
    }
}

// ============================================================================
// 3. Search Invariants
// ============================================================================

proptest! {
    /// Search results are a subset of the input and all contain the term.
    #[test]
    fn search_returns_matching_subset(term in "[a-zA-Z.]{0,8}") {
        let schema = catalog_schema();
        let options = expand_paths(&schema, "product", "", &ExpandContext::new());

        let hits = search_options(options.clone(), &term);

        prop_assert!(hits.len() <= options.len());
        for hit in &hits {
            prop_assert!(hit.value.contains(&term));
            prop_assert!(options.contains(hit));
        }
    }

    /// An empty term keeps the complete list in order.
    #[test]
    fn empty_term_keeps_everything(typed in typed_path_strategy()) {
        let schema = catalog_schema();
        let options = expand_paths(&schema, "product", &typed, &ExpandContext::new());

        prop_assert_eq!(search_options(options.clone(), ""), options);
    }

    /// Filtering twice with the same term changes nothing.
    #[test]
    fn search_is_idempotent(term in "[a-zA-Z.]{0,8}") {
        let schema = catalog_schema();
        let options = expand_paths(&schema, "product", "", &ExpandContext::new());

        let once = search_options(options, &term);
        let twice = search_options(once.clone(), &term);

        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// 4. Ordering Invariants
// ============================================================================

proptest! {
    /// Sorting is idempotent, ascending, and preserves the label multiset.
    #[test]
    fn sort_preserves_multiset(labels in prop::collection::vec("[a-z._]{0,12}", 0..20)) {
        let options: Vec<PathOption> =
            labels.iter().map(|l| PathOption::new(l.as_str())).collect();

        let mut sorted = options.clone();
        sort_options(&mut sorted);
        let mut twice = sorted.clone();
        sort_options(&mut twice);
        prop_assert_eq!(&sorted, &twice);

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].label <= pair[1].label);
        }

        let mut original_labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        original_labels.sort();
        let sorted_labels: Vec<&str> = sorted.iter().map(|o| o.label.as_str()).collect();
        prop_assert_eq!(original_labels, sorted_labels);
    }

    /// visible_results is exactly expand, then filter, then sort.
    #[test]
    fn visible_results_composes(
        typed in typed_path_strategy(),
        term in "[a-z.]{0,8}",
        languages in code_list_strategy(),
    ) {
        let schema = catalog_schema();
        let ctx = ExpandContext::new().languages(languages);

        let composed = {
            let mut options = search_options(expand_paths(&schema, "product", &typed, &ctx), &term);
            sort_options(&mut options);
            options
        };

        prop_assert_eq!(visible_results(&schema, "product", &typed, &term, &ctx), composed);
    }

    /// Suggestion output is deterministic for identical inputs.
    #[test]
    fn suggestions_are_deterministic(
        typed in typed_path_strategy(),
        term in "[a-z.]{0,8}",
    ) {
        let schema = catalog_schema();
        let ctx = ExpandContext::new().currencies(["EUR"]).languages(["de-DE"]);

        let first = visible_results(&schema, "product", &typed, &term, &ctx);
        let second = visible_results(&schema, "product", &typed, &term, &ctx);

        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// 5. Validation Invariants
// ============================================================================

proptest! {
    /// Arbitrary entity names never panic the validator.
    #[test]
    fn validation_never_panics(name in "[a-zA-Z0-9_\\- ]{0,24}") {
        let mut schema = EntitySchema::new();
        schema.insert(
            EntityDefinition::builder(name.as_str())
                .property("id", Property::Uuid)
                .build(),
        );
        let _ = validate_schema(&schema);
    }

    /// Well-formed snake_case names always validate.
    #[test]
    fn snake_case_names_validate(name in "[a-z][a-z0-9_]{0,15}") {
        let mut schema = EntitySchema::new();
        schema.insert(
            EntityDefinition::builder(name.as_str())
                .property("id", Property::Uuid)
                .build(),
        );

        let result = validate_schema(&schema);
        prop_assert!(result.is_ok(), "'{}' rejected: {:?}", name, result.errors);
    }

    /// Names with a bad leading character always trip the identifier check.
    #[test]
    fn bad_leading_char_rejected(first in "[A-Z0-9]", rest in "[a-z0-9_]{0,10}") {
        let name = format!("{}{}", first, rest);
        let mut schema = EntitySchema::new();
        schema.insert(
            EntityDefinition::builder(name.as_str())
                .property("id", Property::Uuid)
                .build(),
        );

        let result = validate_schema(&schema);
        prop_assert!(
            result.errors.iter().any(|e| e.code == ErrorCode::InvalidEntityName),
            "expected InvalidEntityName for '{}', got: {:?}", name, result.errors
        );
    }

    /// Unregistered association targets are always diagnosed.
    #[test]
    fn dangling_targets_rejected(target in "[a-z][a-z0-9_]{0,10}") {
        prop_assume!(target != "product");

        let mut schema = EntitySchema::new();
        schema.insert(
            EntityDefinition::builder("product")
                .association("link", Relation::ManyToOne, target.as_str())
                .build(),
        );

        let result = validate_schema(&schema);
        prop_assert!(
            result.errors.iter().any(|e| e.code == ErrorCode::UnknownAssociationTarget),
            "expected UnknownAssociationTarget for '{}', got: {:?}", target, result.errors
        );
    }
}
