#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//! Today this is only [`macro@bts_error`], the attribute that turns a plain enum into
//! the error type used by every library crate (domain, kernel, hosting, bindings, logger).
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! bts-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The expansion refers to `::thiserror`, so consuming crates must depend on it as well.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for the workspace error enums.
///
/// # Injected items
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * A `<Name>Ext` trait with `.context(...)`, implemented for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant wrapping a `source`.
/// * `From<Source>` for every variant wrapping a `source`, so `?` just works.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper to render the optional context in `#[error]` strings.
///
/// # Rules
///
/// 1. Only enums with named-field variants are accepted.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. A variant with a `source` (by name, `#[source]` or `#[from]`) must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use bts_derive::bts_error;
/// use std::borrow::Cow;
///
/// #[bts_error]
/// pub enum LoadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Unsupported{}: {message}", format_context(.context))]
///     Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("Reading bindings")
/// }
/// ```
#[proc_macro_attribute]
pub fn bts_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
