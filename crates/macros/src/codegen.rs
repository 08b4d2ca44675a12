//! Code generation for `#[derive(ValueObject)]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam, Generics, TypeParamBound, parse_quote};

use crate::parsing::{Member, collect_members};

/// Expand the derive into `StructuralEq`, `ValueObject`, `PartialEq`, `Eq` and `Hash` impls.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let members = collect_members(input)?;
    let name = &input.ident;

    let compared: Vec<&syn::Member> = members
        .iter()
        .filter(|m| !m.ignored)
        .map(|m| &m.accessor)
        .collect();
    let member_names = names(&members, false);
    let ignored_names = names(&members, true);

    let eq_generics = with_bounds(&input.generics, &[parse_quote!(::cleanplate_core::StructuralEq)]);
    let (impl_generics, ty_generics, where_clause) = eq_generics.split_for_impl();

    let vo_generics = with_bounds(
        &input.generics,
        &[
            parse_quote!(::cleanplate_core::StructuralEq),
            parse_quote!(::core::fmt::Debug),
            parse_quote!('static),
        ],
    );
    let (vo_impl_generics, _, vo_where_clause) = vo_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::cleanplate_core::StructuralEq for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn structural_eq(&self, other: &Self) -> bool {
                true #(&& ::cleanplate_core::StructuralEq::structural_eq(&self.#compared, &other.#compared))*
            }

            fn structural_hash(&self) -> u64 {
                ::cleanplate_core::MemberHasher::new()
                    #(.member(&self.#compared))*
                    .finish()
            }
        }

        impl #vo_impl_generics ::cleanplate_core::ValueObject for #name #ty_generics #vo_where_clause {
            const MEMBERS: &'static [&'static str] = &[#(#member_names),*];
            const IGNORED_MEMBERS: &'static [&'static str] = &[#(#ignored_names),*];
        }

        impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                ::cleanplate_core::StructuralEq::structural_eq(self, other)
            }
        }

        impl #impl_generics ::core::cmp::Eq for #name #ty_generics #where_clause {}

        impl #impl_generics ::core::hash::Hash for #name #ty_generics #where_clause {
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                state.write_u64(::cleanplate_core::StructuralEq::structural_hash(self));
            }
        }
    })
}

fn names(members: &[Member], ignored: bool) -> Vec<&str> {
    members
        .iter()
        .filter(|m| m.ignored == ignored)
        .map(|m| m.name.as_str())
        .collect()
}

fn with_bounds(generics: &Generics, bounds: &[TypeParamBound]) -> Generics {
    let mut generics = generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.extend(bounds.iter().cloned());
        }
    }
    generics
}
