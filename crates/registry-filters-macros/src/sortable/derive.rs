//! Implementation of the `#[derive(Sortable)]` macro.
//!
//! This macro generates an implementation of the `Sortable` trait and
//! column key constants for building sort states.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_sort_attrs;

/// Main implementation of the Sortable derive macro.
pub fn sortable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Sortable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Sortable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut keys: Vec<String> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let sort_attrs = parse_sort_attrs(&field.attrs)?;
        if !sort_attrs.sortable || sort_attrs.skip {
            continue;
        }

        let column_key = sort_attrs.rename.unwrap_or_else(|| field_name.to_string());
        if keys.contains(&column_key) {
            return Err(Error::new(
                sort_attrs.span,
                format!("duplicate sort key `{column_key}`"),
            ));
        }
        keys.push(column_key.clone());

        let const_name = format_ident!("{}", to_screaming_snake_case(&column_key));

        field_constants.push(quote! {
            /// Column key constant for sort states.
            pub const #const_name: &'static str = #column_key;
        });

        field_matches.push(quote! {
            #column_key => ::registry_filters::SortField::sort_field(&self.#field_name),
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::registry_filters::Sortable for #struct_name #ty_generics #where_clause {
            fn sort_value(&self, key: &str) -> ::registry_filters::Value<'_> {
                match key {
                    #(#field_matches)*
                    _ => ::registry_filters::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
