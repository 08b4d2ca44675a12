//! Derive macro for structural value objects.
//!
//! # Usage
//!
//! ```ignore
//! use cleanplate_core::ValueObject;
//!
//! #[derive(Debug, Clone, ValueObject)]
//! pub struct Address {
//!     street: String,
//!     city: String,
//!     // Excluded from equality and hashing.
//!     #[value_object(ignore)]
//!     geocode_cache: Option<(f64, f64)>,
//! }
//! ```
//!
//! The derive implements `StructuralEq`, `ValueObject`, `PartialEq`, `Eq` and `Hash`,
//! all driven by the same ordered member list: every field in declaration order, whatever
//! its visibility, minus the ones tagged `#[value_object(ignore)]`. Do not also derive
//! `PartialEq`/`Eq`/`Hash` on the same type.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod parsing;

/// Derive structural equality and hashing for a value object.
///
/// # Field Arguments
///
/// - `#[value_object(ignore)]`: exclude the field from equality and hashing
///
/// Generic type parameters are bounded on `StructuralEq`. Lifetime parameters, enums and
/// unions are rejected at compile time.
#[proc_macro_derive(ValueObject, attributes(value_object))]
pub fn derive_value_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    codegen::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
