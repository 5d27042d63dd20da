use crate::annotation::{FieldMeta, KeyResolution, Namespace, resolve};
use crate::errors::BindError;
use crate::source::SourceMap;

/// A composite type whose members can be populated from a [`SourceMap`].
///
/// Derive it with [`#[derive(Bind)]`](derive@crate::Bind): the generated implementation
/// visits every `pub` field in declaration order, skipping the ones annotated with `-`
/// in the current [`Namespace`].
pub trait Bind {
    /// Bind the members of `self`.
    ///
    /// Returns `true` if at least one field was written.
    fn bind_fields(&mut self, source: &SourceMap, namespace: Namespace) -> Result<bool, BindError>;
}

/// A field type that knows how to populate itself from the values stored under a key.
///
/// It is implemented for:
///
/// - every [`FromParam`](crate::FromParam) type, using the first value under the key;
/// - `Vec<T>` and `[T; N]`, using all the values under the key;
/// - `Option<T>`, which is only set to `Some` if something was bound into it;
/// - every type that derives [`Bind`](derive@crate::Bind), which ignores the key and
///   binds its own members instead.
///
/// # Recursive types
///
/// There is no implementation for `Box<T>`. A field pointing back at its enclosing type
/// must be excluded from every namespace, so that no binding code is generated for it:
///
/// ```rust
/// use bindery::Bind;
///
/// #[derive(Bind, Default)]
/// pub struct Category {
///     pub name: String,
///     #[bind(skip)]
///     pub parent: Option<Box<Category>>,
/// }
/// ```
///
/// `#[bind(form = "-")]` alone is not enough: the field would still be bound in the
/// `uri` namespace, and `Option<Box<Category>>` doesn't implement `BindField`.
pub trait BindField {
    /// Bind `self` from the values under `key`.
    ///
    /// Returns `true` if the field was written. A missing key is not an error: the
    /// field is left untouched and `false` is returned.
    fn bind_field(
        &mut self,
        key: &str,
        source: &SourceMap,
        namespace: Namespace,
    ) -> Result<bool, BindError>;
}

// An absent optional is only allocated if something was bound into it.
impl<T> BindField for Option<T>
where
    T: BindField + Default,
{
    fn bind_field(
        &mut self,
        key: &str,
        source: &SourceMap,
        namespace: Namespace,
    ) -> Result<bool, BindError> {
        if let Some(inner) = self {
            return inner.bind_field(key, source, namespace);
        }
        let mut fresh = T::default();
        let is_set = fresh.bind_field(key, source, namespace)?;
        if is_set {
            *self = Some(fresh);
        }
        Ok(is_set)
    }
}

impl<T> Bind for Option<T>
where
    T: Bind + Default,
{
    fn bind_fields(&mut self, source: &SourceMap, namespace: Namespace) -> Result<bool, BindError> {
        if let Some(inner) = self {
            return inner.bind_fields(source, namespace);
        }
        let mut fresh = T::default();
        let is_set = fresh.bind_fields(source, namespace)?;
        if is_set {
            *self = Some(fresh);
        }
        Ok(is_set)
    }
}

/// Bind a regular field.
#[doc(hidden)]
pub fn field<F>(
    slot: &mut F,
    meta: &FieldMeta,
    source: &SourceMap,
    namespace: Namespace,
) -> Result<bool, BindError>
where
    F: BindField + ?Sized,
{
    let KeyResolution::Key(key) = resolve(meta, namespace) else {
        return Ok(false);
    };
    tracing::trace!(key, field = meta.name(), "Binding field");
    slot.bind_field(key, source, namespace)
}

/// Bind an embedded field: its members are treated as members of the enclosing type.
#[doc(hidden)]
pub fn embedded<E>(
    slot: &mut E,
    meta: &FieldMeta,
    source: &SourceMap,
    namespace: Namespace,
) -> Result<bool, BindError>
where
    E: Bind + ?Sized,
{
    if resolve(meta, namespace) == KeyResolution::Skip {
        return Ok(false);
    }
    tracing::trace!(field = meta.name(), "Descending into embedded field");
    slot.bind_fields(source, namespace)
}
