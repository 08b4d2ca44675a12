//! Attribute parsing and member discovery.

use syn::{
    Attribute, Data, DeriveInput, Fields, Ident, Index, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

const ATTRIBUTE: &str = "value_object";

/// One declared field of the value object.
pub(crate) struct Member {
    /// `self.<accessor>` for named and tuple fields alike.
    pub(crate) accessor: syn::Member,
    /// Field name, or its index for tuple structs.
    pub(crate) name: String,
    /// Tagged `#[value_object(ignore)]`.
    pub(crate) ignored: bool,
}

enum MemberArg {
    Ignore,
}

impl Parse for MemberArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        match ident.to_string().as_str() {
            "ignore" => Ok(MemberArg::Ignore),
            other => Err(syn::Error::new(
                ident.span(),
                format!("unknown argument: {}", other),
            )),
        }
    }
}

/// Collect the struct's fields in declaration order.
pub(crate) fn collect_members(input: &DeriveInput) -> syn::Result<Vec<Member>> {
    if let Some(attr) = find_attribute(&input.attrs) {
        return Err(syn::Error::new_spanned(
            attr,
            "`value_object` arguments are only accepted on fields",
        ));
    }

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "value objects own their data; lifetime parameters are not supported",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`ValueObject` can only be derived for structs",
            ));
        }
    };

    let iter: Box<dyn Iterator<Item = (usize, &syn::Field)>> = match fields {
        Fields::Named(named) => Box::new(named.named.iter().enumerate()),
        Fields::Unnamed(unnamed) => Box::new(unnamed.unnamed.iter().enumerate()),
        Fields::Unit => Box::new(core::iter::empty()),
    };

    iter.map(|(index, field)| {
        let (accessor, name) = match &field.ident {
            Some(ident) => (syn::Member::Named(ident.clone()), ident.to_string()),
            None => (syn::Member::Unnamed(Index::from(index)), index.to_string()),
        };
        Ok(Member {
            accessor,
            name,
            ignored: is_ignored(&field.attrs)?,
        })
    })
    .collect()
}

fn find_attribute(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(ATTRIBUTE))
}

fn is_ignored(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut ignored = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE)) {
        let args = attr.parse_args_with(Punctuated::<MemberArg, Token![,]>::parse_terminated)?;
        for arg in args {
            match arg {
                MemberArg::Ignore if ignored => {
                    return Err(syn::Error::new_spanned(attr, "duplicate argument: ignore"));
                }
                MemberArg::Ignore => ignored = true,
            }
        }
    }
    Ok(ignored)
}
