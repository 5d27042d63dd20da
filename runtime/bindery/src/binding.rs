//! Binding strategies.
//!
//! A strategy is a named way of populating a target out of an incoming request.
//! `bindery` provides the two strategies that work on flat, string-keyed data:
//! [`QueryBinding`] and [`UriBinding`].
//!
//! # Validation
//!
//! Neither strategy validates the populated target: they only coerce strings into the
//! declared field types.
//! Strategies that decode request bodies are expected to run a validator once decoding
//! succeeds; query and path binding leave that step to the caller.
use crate::errors::BindError;
use crate::request_head::RequestHead;
use crate::source::SourceMap;
use crate::walk::Bind;

/// A strategy that populates a target using the head of an incoming request.
pub trait Binding {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    /// Populate `target` using the data in `request`.
    fn bind<T>(&self, request: &RequestHead, target: &mut T) -> Result<(), BindError>
    where
        T: Bind + ?Sized;
}

/// A strategy that populates a target using the captures of a router match.
pub trait BindingUri {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    /// Populate `target` using `captures`.
    fn bind_uri<T>(&self, captures: &SourceMap, target: &mut T) -> Result<(), BindError>
    where
        T: Bind + ?Sized;
}

/// Bind the query parameters of a request, using the `form` names of each field.
///
/// See [`bind_query`](crate::bind_query).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryBinding;

impl Binding for QueryBinding {
    fn name(&self) -> &'static str {
        "query"
    }

    fn bind<T>(&self, request: &RequestHead, target: &mut T) -> Result<(), BindError>
    where
        T: Bind + ?Sized,
    {
        crate::bind_query(request, target)
    }
}

/// Bind path captures, using the `uri` names of each field.
///
/// See [`bind_uri`](crate::bind_uri).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UriBinding;

impl BindingUri for UriBinding {
    fn name(&self) -> &'static str {
        "uri"
    }

    fn bind_uri<T>(&self, captures: &SourceMap, target: &mut T) -> Result<(), BindError>
    where
        T: Bind + ?Sized,
    {
        crate::bind_uri(captures, target)
    }
}
