//! Implementation of the `#[derive(SortFields)]` macro.
//!
//! This module contains the procedural macro implementation that maps
//! struct field names to their kind and value.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, FieldsNamed, Generics, Ident, Type, parse_macro_input};

/// The comparable kind of a field, decided from its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Integer,
    Unsigned,
    Float,
    String,
    Boolean,
    Unsupported(String),
}

/// Main implementation of the `SortFields` derive macro.
pub fn derive_sort_fields_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => generate_sort_fields(name, generics, named_fields),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                name,
                "SortFields can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                name,
                "SortFields cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "SortFields can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => syn::Error::new_spanned(name, "SortFields cannot be derived for unions.")
            .to_compile_error(),
    };

    TokenStream::from(expanded)
}

/// Generates the `SortFields` impl for a struct with named fields.
fn generate_sort_fields(name: &Ident, generics: &Generics, fields: &FieldsNamed) -> TokenStream2 {
    let mut kind_arms = Vec::with_capacity(fields.named.len());
    let mut value_arms = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let key = ident.unraw().to_string();
        let kind = classify(&field.ty);

        let kind_tokens = kind_tokens(&kind);
        kind_arms.push(quote! {
            #key => ::core::option::Option::Some(#kind_tokens),
        });

        if let Some(value_tokens) = value_tokens(&kind, ident) {
            value_arms.push(quote! {
                #key => ::core::option::Option::Some(#value_tokens),
            });
        }
    }

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::scalpel::slice::SortFields for #name #type_generics #where_clause {
            fn field_kind(name: &str) -> ::core::option::Option<::scalpel::slice::FieldKind> {
                match name {
                    #(#kind_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(clippy::cast_lossless, clippy::unnecessary_cast, clippy::cast_possible_wrap)]
            fn field_value(&self, name: &str) -> ::core::option::Option<::scalpel::slice::FieldValue<'_>> {
                match name {
                    #(#value_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

/// Decides the kind of a field from its declared type.
fn classify(ty: &Type) -> Kind {
    match ty {
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Reference(reference) => match path_ident(&reference.elem).as_deref() {
            Some("str" | "String") => Kind::String,
            _ => unsupported(ty),
        },
        Type::Path(_) => match path_ident(ty).as_deref() {
            Some("i8" | "i16" | "i32" | "i64" | "i128" | "isize") => Kind::Integer,
            Some("u8" | "u16" | "u32" | "u64" | "u128" | "usize") => Kind::Unsigned,
            Some("f32" | "f64") => Kind::Float,
            Some("String") => Kind::String,
            Some("bool") => Kind::Boolean,
            _ => unsupported(ty),
        },
        _ => unsupported(ty),
    }
}

/// Returns the final identifier of a plain (argument-free, unqualified) type path.
///
/// A multi-segment path only counts when it is rooted in `std`, `core`, or
/// `alloc`; `my::String` names a user type and stays unsupported.
fn path_ident(ty: &Type) -> Option<String> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segments = &type_path.path.segments;
    if segments.len() > 1 {
        let root = segments.first()?.ident.to_string();
        if !matches!(root.as_str(), "std" | "core" | "alloc") {
            return None;
        }
    }
    let segment = segments.last()?;
    segment
        .arguments
        .is_empty()
        .then(|| segment.ident.to_string())
}

fn unsupported(ty: &Type) -> Kind {
    Kind::Unsupported(quote!(#ty).to_string().replace(' ', ""))
}

fn kind_tokens(kind: &Kind) -> TokenStream2 {
    match kind {
        Kind::Integer => quote!(::scalpel::slice::FieldKind::Integer),
        Kind::Unsigned => quote!(::scalpel::slice::FieldKind::Unsigned),
        Kind::Float => quote!(::scalpel::slice::FieldKind::Float),
        Kind::String => quote!(::scalpel::slice::FieldKind::String),
        Kind::Boolean => quote!(::scalpel::slice::FieldKind::Boolean),
        Kind::Unsupported(type_name) => {
            quote!(::scalpel::slice::FieldKind::Unsupported(#type_name))
        }
    }
}

/// Builds the expression reading a field as a `FieldValue`, or `None` for
/// unsupported fields.
fn value_tokens(kind: &Kind, ident: &Ident) -> Option<TokenStream2> {
    let tokens = match kind {
        Kind::Integer => quote!(::scalpel::slice::FieldValue::Integer(self.#ident as i128)),
        Kind::Unsigned => quote!(::scalpel::slice::FieldValue::Unsigned(self.#ident as u128)),
        Kind::Float => quote!(::scalpel::slice::FieldValue::Float(
            <f64 as ::core::convert::From<_>>::from(self.#ident)
        )),
        Kind::String => quote!(::scalpel::slice::FieldValue::String(
            ::core::convert::AsRef::<str>::as_ref(&self.#ident)
        )),
        Kind::Boolean => quote!(::scalpel::slice::FieldValue::Boolean(self.#ident)),
        Kind::Unsupported(_) => return None,
    };
    Some(tokens)
}
