//! Derive macros for docdesk slice action enums
//!
//! This crate provides a procedural macro to reduce boilerplate when
//! defining the actions of a state slice.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums
//!   (requests/responses)
//!
//! # Example
//!
//! ```ignore
//! use docdesk_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum DocumentsAction {
//!     #[request]
//!     FetchRequested,
//!
//!     #[response]
//!     FetchSucceeded { documents: Vec<Document> },
//! }
//!
//! // Generated methods:
//! assert!(DocumentsAction::FetchRequested.is_request());
//! assert_eq!(DocumentsAction::FetchRequested.label(), "fetch-requested");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_request()` - Returns true if this variant starts an asynchronous
///   operation (the pending phase of its lifecycle)
/// - `is_response()` - Returns true if this variant is produced by an
///   effect (the fulfilled or rejected phase)
/// - `label()` - Returns a kebab-case name for the variant, used as a
///   tracing/metrics label
///
/// Variants with neither attribute are synchronous commands: `is_request()`
/// and `is_response()` both return false for them.
///
/// # Attributes
///
/// - `#[request]` - Mark a variant as starting an asynchronous operation
/// - `#[response]` - Mark a variant as an effect-produced result
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[request]` and `#[response]` attributes
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum AuthAction {
///     #[request]
///     LoginRequested { credentials: Credentials },
///
///     #[response]
///     LoginSucceeded { token: String },
///
///     #[response]
///     LoginFailed { message: String },
///
///     Logout,
///     ClearError,
/// }
///
/// let action = AuthAction::Logout;
/// assert!(!action.is_request());
/// assert!(!action.is_response());
/// assert_eq!(action.label(), "logout");
/// ```
#[proc_macro_derive(Action, attributes(request, response))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut request_arms = Vec::new();
    let mut response_arms = Vec::new();
    let mut label_arms = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let is_request = has_attribute(&variant.attrs, "request");
        let is_response = has_attribute(&variant.attrs, "response");

        if is_request && is_response {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[request] and #[response]",
            )
            .to_compile_error()
            .into();
        }

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Unit => quote! { Self::#variant_name },
        };

        if is_request {
            request_arms.push(quote! { #pattern => true, });
        }
        if is_response {
            response_arms.push(quote! { #pattern => true, });
        }

        let label = kebab_case(&variant_name.to_string());
        label_arms.push(quote! { #pattern => #label, });
    }

    let expanded = quote! {
        impl #name {
            /// Returns true if this action starts an asynchronous operation
            #[must_use]
            pub const fn is_request(&self) -> bool {
                match self {
                    #(#request_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action was produced by an effect
            #[must_use]
            pub const fn is_response(&self) -> bool {
                match self {
                    #(#response_arms)*
                    _ => false,
                }
            }

            /// Returns a kebab-case label for this variant, for tracing and metrics
            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    #(#label_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Convert a PascalCase identifier to kebab-case
fn kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
