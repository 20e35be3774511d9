//! Attribute parsing for the Sortable derive macro.
//!
//! Fields opt in with `#[sort]`, and may be renamed or skipped:
//! `#[sort(rename = "createdAt")]`, `#[sort(skip)]`.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[sort(...)]`.
#[derive(Debug, Clone)]
pub struct SortAttr {
    /// The field carries a `#[sort]` attribute.
    pub sortable: bool,
    /// Skip this field.
    pub skip: bool,
    /// Custom column key (default: field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for SortAttr {
    fn default() -> Self {
        SortAttr {
            sortable: false,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for SortAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SortAttr {
            sortable: true,
            ..SortAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename = Some(s.value());
                        attr.span = s.span();
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown sort attribute. Expected: skip or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract the `#[sort]` / `#[sort(...)]` attribute from a field.
pub fn parse_sort_attrs(attrs: &[Attribute]) -> Result<SortAttr> {
    for attr in attrs {
        if attr.path().is_ident("sort") {
            return match &attr.meta {
                Meta::Path(path) => Ok(SortAttr {
                    sortable: true,
                    span: path.span(),
                    ..SortAttr::default()
                }),
                _ => attr.parse_args::<SortAttr>(),
            };
        }
    }
    Ok(SortAttr::default())
}
