//! Property-based tests for gsales
//!
//! Identifier resolution and query encoding are checked against generated
//! input rather than a handful of hand-picked values.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use crate::error::Error;
    use crate::types::{CollectionQuery, Filter, Identifier, Sort, filter_params, resolve_value};

    fn arb_field() -> impl Strategy<Value = String> {
        "[a-z_]{1,16}"
    }

    // ===== Identifier Resolution Properties =====

    proptest! {
        /// Property: every non-negative integer resolves to itself
        #[test]
        fn prop_integer_resolves_to_itself(raw in any::<u64>()) {
            prop_assert_eq!(resolve_value(&json!(raw)).unwrap(), Identifier::new(raw));
        }

        /// Property: numeric strings resolve like the number they hold
        #[test]
        fn prop_numeric_string_matches_number(raw in any::<u64>(), pad in " {0,3}") {
            let text = format!("{pad}{raw}{pad}");
            prop_assert_eq!(
                resolve_value(&json!(text)).unwrap(),
                resolve_value(&json!(raw)).unwrap()
            );
        }

        /// Property: an object with an `id` resolves like the `id` itself
        #[test]
        fn prop_object_resolves_through_id(raw in any::<u64>(), title in "[a-zA-Z ]{0,20}") {
            let object = json!({"id": raw, "title": title});
            prop_assert_eq!(resolve_value(&object).unwrap(), Identifier::new(raw));
        }

        /// Property: negative integers are never identifiers
        #[test]
        fn prop_negative_integer_rejected(raw in i64::MIN..0i64) {
            let result = resolve_value(&json!(raw));
            prop_assert!(matches!(result, Err(Error::InvalidReferenceKind(_))));
        }

        /// Property: strings without digits are never identifiers
        #[test]
        fn prop_alphabetic_string_rejected(text in "[a-zA-Z]{1,12}") {
            let result = resolve_value(&Value::String(text));
            prop_assert!(matches!(result, Err(Error::InvalidReferenceKind(_))));
        }

        /// Property: resolution is deterministic
        #[test]
        fn prop_resolution_is_pure(raw in any::<u64>()) {
            let value = json!({"id": raw.to_string()});
            prop_assert_eq!(resolve_value(&value).unwrap(), resolve_value(&value).unwrap());
        }
    }

    // ===== Query Encoding Properties =====

    proptest! {
        /// Property: the params contain exactly the parts that were set
        #[test]
        fn prop_query_sends_only_present_parts(
            limit in proptest::option::of(0u32..1000),
            offset in proptest::option::of(0u32..1000),
            sort in proptest::option::of(arb_field()),
            filters in proptest::collection::vec(arb_field(), 0..4),
        ) {
            let mut query = CollectionQuery::new();
            let mut expected = Vec::new();
            if !filters.is_empty() {
                query = query.filters(filters.iter().map(|f| Filter::equal(f.as_str(), 1)));
                expected.push("filter");
            }
            if let Some(limit) = limit {
                query = query.limit(limit);
                expected.push("limit");
            }
            if let Some(offset) = offset {
                query = query.offset(offset);
                expected.push("offset");
            }
            if let Some(field) = sort {
                query = query.sort(Sort::asc(field));
                expected.push("sort");
            }

            let params = query.to_params().unwrap();
            let mut keys: Vec<&str> = params.keys().map(String::as_str).collect();
            keys.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(keys, expected);
        }

        /// Property: count params equal list params for the same filters
        #[test]
        fn prop_count_filter_matches_list_filter(
            fields in proptest::collection::vec(arb_field(), 0..5),
        ) {
            let filters: Vec<Filter> =
                fields.iter().map(|f| Filter::like(f.as_str(), "%x%")).collect();
            let count = filter_params(&filters).unwrap();
            let list = CollectionQuery::from(filters).to_params().unwrap();
            prop_assert_eq!(count, list);
        }
    }
}
