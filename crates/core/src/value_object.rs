//! Value objects: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects of the same type whose attributes are
//! equal are considered equal, and hash equal.
//!
//! The comparison is structural: every member declared on the type takes part, in
//! declaration order, except members tagged `#[value_object(ignore)]`. Members that are
//! value objects themselves are compared with the same rule, recursively.

use core::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Initial state of every member fold.
pub const HASH_SEED: u64 = 17;

/// Multiplier applied to the running state before a member hash is folded in.
pub const HASH_FACTOR: u64 = 23;

/// Hash contributed by an absent (`None`) member.
pub const NULL_MEMBER_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

/// A "comparable value": anything that can take part in structural equality.
///
/// Implemented for primitives, strings, identifiers, dates, the usual smart pointers and
/// collections, and (through `#[derive(ValueObject)]`) for value objects themselves.
///
/// Contract: `a.structural_eq(b)` implies `a.structural_hash() == b.structural_hash()`.
pub trait StructuralEq {
    /// Compare two values of the same type by their content.
    fn structural_eq(&self, other: &Self) -> bool;

    /// Hash consistent with [`StructuralEq::structural_eq`].
    fn structural_hash(&self) -> u64;
}

/// Order-sensitive fold of member hashes.
///
/// Starts from [`HASH_SEED`] and computes `state * HASH_FACTOR + member` (wrapping) for
/// each member in turn. Zero-valued members still move the state, so no member is ever
/// dropped from the hash because it holds a default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberHasher {
    state: u64,
}

impl MemberHasher {
    pub const fn new() -> Self {
        Self { state: HASH_SEED }
    }

    /// Fold in the structural hash of a member.
    #[must_use]
    pub fn member<T: StructuralEq + ?Sized>(self, value: &T) -> Self {
        self.combine(value.structural_hash())
    }

    /// Fold in a raw hash value.
    #[must_use]
    pub const fn combine(self, hash: u64) -> Self {
        Self {
            state: self.state.wrapping_mul(HASH_FACTOR).wrapping_add(hash),
        }
    }

    pub const fn finish(self) -> u64 {
        self.state
    }
}

impl Default for MemberHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Value object capability.
///
/// Derive it with `#[derive(ValueObject)]`; the derive also generates `StructuralEq`,
/// `PartialEq`, `Eq` and `Hash` from the same member list, so `==`, `!=`, hashed
/// collections and the methods below all agree.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with same values are equal)
/// - **Entity**: has identity (two entities with same ID are the same entity)
///
/// ## Usage Pattern
///
/// ```
/// use cleanplate_core::ValueObject;
///
/// #[derive(Debug, Clone, ValueObject)]
/// struct Money {
///     amount: i64,
///     currency: String,
///     #[value_object(ignore)]
///     display_hint: Option<String>,
/// }
///
/// let m1 = Money { amount: 100, currency: "USD".into(), display_hint: None };
/// let m2 = Money { amount: 100, currency: "USD".into(), display_hint: Some("$".into()) };
/// assert_eq!(m1, m2);
/// assert_eq!(m1.hash_code(), m2.hash_code());
/// assert!(!m1.equals(Some(&42_i64)));
/// ```
pub trait ValueObject: StructuralEq + core::fmt::Debug + Any {
    /// Names of the members compared, in comparison order.
    const MEMBERS: &'static [&'static str];

    /// Names of the members tagged for exclusion.
    const IGNORED_MEMBERS: &'static [&'static str];

    /// Compare against an arbitrary, possibly absent operand.
    ///
    /// Returns `false` for `None` and for any operand whose runtime type is not exactly
    /// `Self`, even when that type wraps or mirrors `Self`'s members.
    fn equals(&self, other: Option<&dyn Any>) -> bool
    where
        Self: Sized,
    {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self.structural_eq(other))
    }

    /// Structural hash code; equal for any two values that are [`ValueObject::equals`].
    fn hash_code(&self) -> u64 {
        self.structural_hash()
    }
}

/// Equality over possibly-absent operands.
///
/// | left | right | result |
/// |------|-------|--------|
/// | `None` | `None` | `true` |
/// | `None` | `Some` | `false` |
/// | `Some` | `None` | `false` |
/// | `Some(a)` | `Some(b)` | `a.structural_eq(b)` |
pub fn value_eq<T: ValueObject>(left: Option<&T>, right: Option<&T>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.structural_eq(right),
        _ => false,
    }
}

/// Exact complement of [`value_eq`].
pub fn value_ne<T: ValueObject>(left: Option<&T>, right: Option<&T>) -> bool {
    !value_eq(left, right)
}

fn std_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

macro_rules! impl_structural_eq_via_std {
    ($($t:ty),* $(,)?) => {
        $(
            impl StructuralEq for $t {
                fn structural_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn structural_hash(&self) -> u64 {
                    std_hash(self)
                }
            }
        )*
    };
}

impl_structural_eq_via_std!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, str, String, (),
    Uuid, NaiveDate, DateTime<Utc>,
);

// Floats compare by canonical bit pattern: -0.0 equals 0.0 and every NaN equals every
// other NaN, which keeps the derived `Eq` reflexive.
macro_rules! canonical_bits {
    ($v:expr, $t:ty) => {{
        let v: $t = $v;
        if v.is_nan() {
            <$t>::NAN.to_bits()
        } else if v == 0.0 {
            (0.0 as $t).to_bits()
        } else {
            v.to_bits()
        }
    }};
}

macro_rules! impl_structural_eq_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl StructuralEq for $t {
                fn structural_eq(&self, other: &Self) -> bool {
                    canonical_bits!(*self, $t) == canonical_bits!(*other, $t)
                }

                fn structural_hash(&self) -> u64 {
                    std_hash(&canonical_bits!(*self, $t))
                }
            }
        )*
    };
}

impl_structural_eq_for_float!(f32, f64);

impl<T: StructuralEq + ?Sized> StructuralEq for &T {
    fn structural_eq(&self, other: &Self) -> bool {
        T::structural_eq(*self, *other)
    }

    fn structural_hash(&self) -> u64 {
        T::structural_hash(*self)
    }
}

macro_rules! impl_structural_eq_for_pointer {
    ($($p:ident),* $(,)?) => {
        $(
            impl<T: StructuralEq + ?Sized> StructuralEq for $p<T> {
                fn structural_eq(&self, other: &Self) -> bool {
                    T::structural_eq(&**self, &**other)
                }

                fn structural_hash(&self) -> u64 {
                    T::structural_hash(&**self)
                }
            }
        )*
    };
}

impl_structural_eq_for_pointer!(Box, Rc, Arc);

impl<T: StructuralEq> StructuralEq for Option<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.structural_eq(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn structural_hash(&self) -> u64 {
        match self {
            Some(value) => value.structural_hash(),
            None => NULL_MEMBER_HASH,
        }
    }
}

impl<T: StructuralEq> StructuralEq for [T] {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.structural_eq(b))
    }

    fn structural_hash(&self) -> u64 {
        self.iter()
            .fold(MemberHasher::new().combine(self.len() as u64), |hasher, item| {
                hasher.member(item)
            })
            .finish()
    }
}

impl<T: StructuralEq, const N: usize> StructuralEq for [T; N] {
    fn structural_eq(&self, other: &Self) -> bool {
        self.as_slice().structural_eq(other.as_slice())
    }

    fn structural_hash(&self) -> u64 {
        self.as_slice().structural_hash()
    }
}

impl<T: StructuralEq> StructuralEq for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.as_slice().structural_eq(other.as_slice())
    }

    fn structural_hash(&self) -> u64 {
        self.as_slice().structural_hash()
    }
}

macro_rules! impl_structural_eq_for_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: StructuralEq),+> StructuralEq for ($($name,)+) {
            fn structural_eq(&self, other: &Self) -> bool {
                true $(&& self.$idx.structural_eq(&other.$idx))+
            }

            fn structural_hash(&self) -> u64 {
                MemberHasher::new()$(.member(&self.$idx))+.finish()
            }
        }
    };
}

impl_structural_eq_for_tuple!(A.0, B.1);
impl_structural_eq_for_tuple!(A.0, B.1, C.2);
