use std::collections::HashSet;

use cleanplate_core::{ValueObject, value_eq, value_ne};
use proptest::prelude::*;

#[derive(Debug, Clone, Default, ValueObject)]
pub struct TestValue {
    pub property1: Option<String>,
    pub property2: i32,
    pub field: i32,
    pub(crate) crate_field: i32,
    private_field: i32,
}

impl TestValue {
    fn new(property1: Option<&str>, property2: i32, field: i32) -> Self {
        Self {
            property1: property1.map(str::to_owned),
            property2,
            field,
            ..Self::default()
        }
    }

    fn with_non_public(value: i32) -> Self {
        Self {
            crate_field: value,
            private_field: value,
            ..Self::default()
        }
    }
}

fn assert_equal(value1: &TestValue, value2: &TestValue) {
    assert_eq!(value1, value2);
    assert!(value1 == value2);
    assert!(!(value1 != value2));
    assert!(value1.equals(Some(value2)));
    assert!(value_eq(Some(value1), Some(value2)));
    assert!(!value_ne(Some(value1), Some(value2)));
    assert_eq!(value1.hash_code(), value2.hash_code());
}

fn assert_not_equal(value1: &TestValue, value2: &TestValue) {
    assert_ne!(value1, value2);
    assert!(value1 != value2);
    assert!(!(value1 == value2));
    assert!(!value1.equals(Some(value2)));
    assert!(!value_eq(Some(value1), Some(value2)));
    assert!(value_ne(Some(value1), Some(value2)));
}

#[test]
fn absent_members_are_considered_equal() {
    assert_equal(&TestValue::default(), &TestValue::default());
}

#[test]
fn only_one_member_absent_is_not_equal() {
    let value1 = TestValue::default();
    let value2 = TestValue::new(Some("value"), 0, 0);

    assert_not_equal(&value1, &value2);
}

#[test]
fn compares_all_members_equal() {
    let value1 = TestValue::new(Some("test"), 10, 3);
    let value2 = TestValue::new(Some("test"), 10, 3);

    assert_equal(&value1, &value2);
}

#[test]
fn differing_string_member_is_not_equal() {
    let value1 = TestValue::new(Some("test"), 10, 0);
    let value2 = TestValue::new(Some("Test"), 10, 0);

    assert_not_equal(&value1, &value2);
}

#[test]
fn differing_field_is_not_equal() {
    let value1 = TestValue::new(Some("test"), 10, 8);
    let value2 = TestValue::new(Some("test"), 10, 9);

    assert_not_equal(&value1, &value2);
}

#[test]
fn changing_one_field_changes_equality_and_hash() {
    let value1 = TestValue::new(Some("test"), 10, 3);
    let value2 = TestValue::new(Some("test"), 10, 8);

    assert_not_equal(&value1, &value2);
    assert_ne!(value1.hash_code(), value2.hash_code());
}

#[test]
fn non_public_members_are_compared() {
    let value1 = TestValue::with_non_public(5);
    let value2 = TestValue::with_non_public(8);

    assert_not_equal(&value1, &value2);
    assert_equal(&value1, &TestValue::with_non_public(5));
}

#[test]
fn comparing_with_absent_returns_false() {
    let value = TestValue::new(Some("string"), 0, 0);

    assert!(!value.equals(None));
}

#[test]
fn comparing_with_wrong_type_returns_false() {
    let value = TestValue::new(Some("string"), 0, 0);

    assert!(!value.equals(Some(&10_i32)));
    assert!(!value.equals(Some(&"string")));
}

#[test]
fn operator_table_handles_absent_operands() {
    let value = TestValue::default();

    assert!(!value_eq(None, Some(&value)));
    assert!(!value_eq(Some(&value), None));
    assert!(value_eq::<TestValue>(None, None));

    assert!(value_ne(None, Some(&value)));
    assert!(value_ne(Some(&value), None));
    assert!(!value_ne::<TestValue>(None, None));
}

#[test]
fn optional_values_follow_the_same_table() {
    let value = Some(TestValue::default());
    let absent: Option<TestValue> = None;

    assert!(absent == None);
    assert!(value != absent);
    assert!(absent != value);
    assert!(value == Some(TestValue::default()));
}

#[test]
fn hash_always_equal_for_equal_objects() {
    let value1 = TestValue::new(Some("string"), 4, 0);
    let value2 = TestValue::new(Some("string"), 4, 0);

    assert_eq!(value1.hash_code(), value2.hash_code());
}

#[test]
fn hash_differs_for_distinct_int_member() {
    let value1 = TestValue::new(Some("string"), 4, 0);
    let value2 = TestValue::new(Some("string"), 5, 0);

    assert_ne!(value1.hash_code(), value2.hash_code());
}

#[test]
fn hash_differs_for_distinct_string_member() {
    let value1 = TestValue::new(Some("string"), 4, 0);
    let value2 = TestValue::new(Some("String"), 4, 0);

    assert_ne!(value1.hash_code(), value2.hash_code());
}

#[test]
fn hash_handles_absent_members() {
    let value1 = TestValue::new(None, 2, 0);
    let value2 = TestValue::new(None, 5, 0);

    assert_ne!(value1.hash_code(), value2.hash_code());
}

#[test]
fn hash_considers_fields_holding_defaults() {
    let value1 = TestValue::new(None, 2, 0);
    let value2 = TestValue::new(None, 2, 4);

    assert_ne!(value1.hash_code(), value2.hash_code());
}

#[test]
fn hashed_collections_deduplicate_equal_values() {
    let set: HashSet<TestValue> = [
        TestValue::new(Some("a"), 1, 1),
        TestValue::new(Some("a"), 1, 1),
        TestValue::new(Some("b"), 1, 1),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 2);
}

#[test]
fn registers_members_in_declaration_order() {
    assert_eq!(
        TestValue::MEMBERS,
        ["property1", "property2", "field", "crate_field", "private_field"]
    );
    assert!(TestValue::IGNORED_MEMBERS.is_empty());
}

#[derive(Debug, Clone, Default, ValueObject)]
struct Recursive {
    recurse: Option<Box<Recursive>>,
    terminal: Option<String>,
}

#[test]
fn nested_values_compare_structurally() {
    let nested_value = Recursive {
        recurse: None,
        terminal: Some("test".into()),
    };
    let nested_value2 = Recursive {
        recurse: None,
        terminal: Some("test".into()),
    };
    let value = Recursive {
        recurse: Some(Box::new(nested_value)),
        terminal: None,
    };
    let value2 = Recursive {
        recurse: Some(Box::new(nested_value2)),
        terminal: None,
    };

    assert!(value.equals(Some(&value2)));
    assert_eq!(value.hash_code(), value2.hash_code());
}

#[test]
fn nested_values_differing_at_a_leaf_are_not_equal() {
    let leaf = |terminal: &str| Recursive {
        recurse: None,
        terminal: Some(terminal.into()),
    };
    let tree = |terminal: &str| Recursive {
        recurse: Some(Box::new(Recursive {
            recurse: Some(Box::new(leaf(terminal))),
            terminal: Some("middle".into()),
        })),
        terminal: Some("root".into()),
    };

    assert_eq!(tree("leaf"), tree("leaf"));
    assert_ne!(tree("leaf"), tree("Leaf"));
    assert_ne!(tree("leaf"), leaf("leaf"));
}

#[derive(Debug, Clone, Default, ValueObject)]
struct Ignore {
    #[value_object(ignore)]
    ignored: i32,
    #[value_object(ignore)]
    ignored_field: i32,
    considered: i32,
}

#[test]
fn ignored_property_is_not_considered() {
    let value1 = Ignore {
        ignored: 2,
        considered: 4,
        ..Ignore::default()
    };
    let value2 = Ignore {
        ignored: 3,
        considered: 4,
        ..Ignore::default()
    };

    assert!(value1.equals(Some(&value2)));
    assert_eq!(value1.hash_code(), value2.hash_code());
}

#[test]
fn ignored_field_is_not_considered() {
    let value1 = Ignore {
        ignored_field: 3,
        considered: 4,
        ..Ignore::default()
    };
    let value2 = Ignore {
        ignored_field: 2,
        considered: 4,
        ..Ignore::default()
    };

    assert!(value1.equals(Some(&value2)));
    assert_eq!(value1.hash_code(), value2.hash_code());
    assert_eq!(Ignore::MEMBERS, ["considered"]);
    assert_eq!(Ignore::IGNORED_MEMBERS, ["ignored", "ignored_field"]);
}

#[test]
fn considered_member_still_matters() {
    let value1 = Ignore {
        considered: 4,
        ..Ignore::default()
    };
    let value2 = Ignore {
        considered: 5,
        ..Ignore::default()
    };

    assert_ne!(value1, value2);
}

#[derive(Debug, Clone, Default, ValueObject)]
struct MyValue {
    num: i32,
}

// Extends `MyValue` by wrapping it; same compared data, different type.
#[derive(Debug, Clone, Default, ValueObject)]
struct MyValue2(MyValue);

#[derive(Debug, Clone, Default, ValueObject)]
struct MyValueLookalike {
    num: i32,
}

#[test]
fn objects_of_different_type_are_not_equal_even_if_wrapping() {
    let value1 = MyValue::default();
    let value2 = MyValue2::default();
    let lookalike = MyValueLookalike::default();

    assert!(!value1.equals(Some(&value2)));
    assert!(!value2.equals(Some(&value1)));
    assert!(!value1.equals(Some(&lookalike)));
    assert!(value1.equals(Some(&MyValue::default())));
}

#[derive(Debug, Clone, ValueObject)]
struct Tagged<T> {
    tag: String,
    value: T,
}

#[test]
fn generic_members_use_their_own_structural_rule() {
    let a = Tagged { tag: "t".into(), value: MyValue { num: 1 } };
    let b = Tagged { tag: "t".into(), value: MyValue { num: 1 } };
    let c = Tagged { tag: "t".into(), value: MyValue { num: 2 } };

    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_ne!(a, c);
    assert!(!a.equals(Some(&Tagged { tag: "t".into(), value: 1_i32 })));
}

fn test_value() -> impl Strategy<Value = TestValue> {
    (
        proptest::option::of("[a-zA-Z]{0,8}"),
        any::<i32>(),
        any::<i32>(),
        any::<i32>(),
    )
        .prop_map(|(property1, property2, field, hidden)| TestValue {
            property1,
            property2,
            field,
            crate_field: hidden,
            private_field: hidden,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: a clone is equal and hash equal to its source.
    #[test]
    fn clones_are_equal_and_hash_equal(value in test_value()) {
        let copy = value.clone();
        prop_assert!(value.equals(Some(&copy)));
        prop_assert!(value_eq(Some(&value), Some(&copy)));
        prop_assert_eq!(value.hash_code(), copy.hash_code());
    }

    /// Property: `value_ne` is the exact complement of `value_eq`.
    #[test]
    fn not_equals_is_the_complement(a in test_value(), b in test_value()) {
        prop_assert_eq!(value_ne(Some(&a), Some(&b)), !value_eq(Some(&a), Some(&b)));
        prop_assert_eq!(a != b, !(a == b));
    }

    /// Property: equality implies equal hashes.
    #[test]
    fn equality_implies_equal_hashes(a in test_value(), b in test_value()) {
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
    }

    /// Property: changing any single member breaks equality.
    #[test]
    fn differing_in_one_member_breaks_equality(value in test_value(), delta in 1..i32::MAX) {
        let mut changed = value.clone();
        changed.field = changed.field.wrapping_add(delta);
        prop_assert!(!value.equals(Some(&changed)));
        prop_assert!(value != changed);
    }

    /// Property: ignored members never affect equality or hash.
    #[test]
    fn ignored_members_never_matter(
        considered in any::<i32>(),
        a in any::<i32>(),
        b in any::<i32>(),
    ) {
        let left = Ignore { ignored: a, ignored_field: b, considered };
        let right = Ignore { ignored: b, ignored_field: a, considered };
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.hash_code(), right.hash_code());
    }
}
