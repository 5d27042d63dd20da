use std::fmt::{self, Display, Formatter};

/// The annotation value that excludes a field, and everything beneath it, from binding.
pub const SKIP_MARKER: &str = "-";

/// The character separating the binding key from its (ignored) options in an annotation.
pub const OPTIONS_SEPARATOR: char = ',';

/// Which annotation is used to name a field.
///
/// The same field can carry a different name in each namespace:
///
/// ```rust
/// #[derive(bindery::Bind, Default)]
/// pub struct Home {
///     #[bind(form = "home_id", uri = "id")]
///     pub home_id: u64,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Namespace {
    /// Query string (and form) parameters, set via `#[bind(form = "...")]`.
    Form,
    /// Path captures, set via `#[bind(uri = "...")]`.
    Uri,
}

impl Namespace {
    /// The name of the annotation key for this namespace.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Form => "form",
            Namespace::Uri => "uri",
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The binding metadata of a single field.
///
/// You don't build it by hand: `#[derive(Bind)]` emits one for each field it binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    name: &'static str,
    form: Option<&'static str>,
    uri: Option<&'static str>,
}

impl FieldMeta {
    #[doc(hidden)]
    pub const fn new(
        name: &'static str,
        form: Option<&'static str>,
        uri: Option<&'static str>,
    ) -> Self {
        Self { name, form, uri }
    }

    /// The field identifier, as declared in the struct definition.
    pub fn name(&self) -> &'static str {
        self.name.strip_prefix("r#").unwrap_or(self.name)
    }

    /// The raw annotation for the given namespace, if there is one.
    pub fn annotation(&self, namespace: Namespace) -> Option<&'static str> {
        match namespace {
            Namespace::Form => self.form,
            Namespace::Uri => self.uri,
        }
    }
}

/// The outcome of [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResolution {
    /// Look up the field's values under this key.
    Key(&'static str),
    /// The field must not be visited.
    Skip,
}

/// Determine the key a field is bound from in `namespace`.
///
/// The annotation is cut at the first `,`; anything after it is reserved for options
/// and ignored.
/// A missing or empty annotation falls back to the field identifier.
/// A key equal to `-` skips the field.
pub fn resolve(field: &FieldMeta, namespace: Namespace) -> KeyResolution {
    let key = field
        .annotation(namespace)
        .map(|annotation| split_annotation(annotation).0)
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| field.name());
    if key == SKIP_MARKER {
        KeyResolution::Skip
    } else {
        KeyResolution::Key(key)
    }
}

/// Split an annotation into the binding key and the (possibly empty) options that follow it.
pub fn split_annotation(annotation: &str) -> (&str, &str) {
    annotation
        .split_once(OPTIONS_SEPARATOR)
        .unwrap_or((annotation, ""))
}
