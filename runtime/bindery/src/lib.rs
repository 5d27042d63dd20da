//! # bindery
//!
//! Populate annotated Rust structs from flat, multi-valued string sources: the query
//! parameters of a request or the captures of a router match.
//!
//! ```rust
//! use bindery::{Bind, SourceMap};
//!
//! #[derive(Bind, Default, Debug, PartialEq)]
//! pub struct Pagination {
//!     pub page: u32,
//!     #[bind(form = "per_page")]
//!     pub size: u32,
//!     pub tags: Vec<String>,
//!     pub cursor: Option<u64>,
//! }
//!
//! let source = SourceMap::from_query("page=2&per_page=10&tags=a&tags=b");
//! let mut pagination = Pagination::default();
//! bindery::bind(&mut pagination, &source, bindery::Namespace::Form).unwrap();
//! assert_eq!(
//!     pagination,
//!     Pagination { page: 2, size: 10, tags: vec!["a".into(), "b".into()], cursor: None }
//! );
//! ```
//!
//! # Field annotations
//!
//! - `#[bind(form = "name")]`, `#[bind(uri = "name")]`: the key used in each namespace.
//!   Anything after the first `,` is ignored. Without an annotation, the field name is used.
//!   `"-"` skips the field in that namespace.
//! - `#[bind(skip)]`: skip the field in every namespace.
//! - `#[bind(flatten)]`: bind the members of a nested struct as if they were declared on
//!   the enclosing one.
//!
//! Only `pub` fields are bound. Flattened fields are the exception: their `pub` members
//! are bound whatever the visibility of the flattened field itself.
//!
//! # Failures
//!
//! The first failure aborts binding and is returned as a [`BindError`].
//! Fields written before the failure keep their new values.
pub use annotation::{FieldMeta, KeyResolution, Namespace, resolve, split_annotation};
pub use binding::{Binding, BindingUri, QueryBinding, UriBinding};
/// Derive [`Bind`](trait@Bind) and [`BindField`] for a struct with named fields.
///
/// See the [crate-level documentation](crate) for the supported annotations.
pub use bindery_macros::Bind;
pub use coerce::{FromParam, Json, coerce};
pub use container::{build_array, build_sequence};
pub use errors::BindError;
pub use request_head::RequestHead;
pub use source::SourceMap;
pub use walk::{Bind, BindField};

mod annotation;
pub mod binding;
mod coerce;
mod container;
pub mod errors;
mod request_head;
mod source;
mod walk;

#[doc(hidden)]
pub mod __private {
    pub use crate::walk::{embedded, field};
}

/// Bind `source` into `target`, naming fields according to `namespace`.
///
/// Keys that no field asks for are ignored, and fields whose key is missing are left
/// untouched.
pub fn bind<T>(target: &mut T, source: &SourceMap, namespace: Namespace) -> Result<(), BindError>
where
    T: Bind + ?Sized,
{
    tracing::trace!(%namespace, keys = source.len(), "Binding source map");
    match target.bind_fields(source, namespace) {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::debug!(error = %e, %namespace, "Failed to bind source map");
            Err(e)
        }
    }
}

/// Bind the captures of a router match into `target`, using the `uri` name of each field.
///
/// Use [`SourceMap::from_encoded_path_params`] to build `captures` out of percent-encoded
/// router output.
pub fn bind_uri<T>(captures: &SourceMap, target: &mut T) -> Result<(), BindError>
where
    T: Bind + ?Sized,
{
    bind(target, captures, Namespace::Uri)
}

/// Bind the query parameters of `request` into `target`, using the `form` name of each field.
pub fn bind_query<T>(request: &RequestHead, target: &mut T) -> Result<(), BindError>
where
    T: Bind + ?Sized,
{
    let source = SourceMap::from_query(request.query());
    bind(target, &source, Namespace::Form)
}
