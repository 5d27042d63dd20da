//! Errors that can happen when binding a [`SourceMap`] into a target type.
//!
//! [`SourceMap`]: crate::SourceMap
use std::fmt::{self, Display, Formatter};
use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;

use http::StatusCode;

/// The error returned by [`bind`](crate::bind) and the functions built on top of it.
///
/// The first failure aborts the walk.
/// Fields that were written before the failing one keep their new values: binding
/// does not roll back partial writes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BindError {
    #[error(transparent)]
    /// See [`UnknownTypeError`] for details.
    UnknownType(UnknownTypeError),
    #[error(transparent)]
    /// See [`ParseError`] for details.
    Parse(ParseError),
    #[error(transparent)]
    /// See [`ShapeError`] for details.
    Shape(ShapeError),
    #[error(transparent)]
    /// See [`CustomUnmarshalError`] for details.
    CustomUnmarshal(CustomUnmarshalError),
}

impl BindError {
    /// Wrap an error returned by a user-defined [`FromParam`] implementation.
    ///
    /// The wrapped error is exposed, unchanged, as the [`source`](std::error::Error::source)
    /// of the resulting [`CustomUnmarshalError`].
    ///
    /// [`FromParam`]: crate::FromParam
    pub fn custom<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self::CustomUnmarshal(CustomUnmarshalError {
            key: None,
            source: error.into(),
        })
    }

    /// The binding key of the field that failed, if the error was raised while
    /// walking a target.
    pub fn key(&self) -> Option<&str> {
        match self {
            BindError::UnknownType(e) => e.key.as_deref(),
            BindError::Parse(e) => e.key.as_deref(),
            BindError::Shape(e) => e.key.as_deref(),
            BindError::CustomUnmarshal(e) => e.key.as_deref(),
        }
    }

    /// The status code a server should use when rejecting a request because of this error.
    ///
    /// [`BindError::UnknownType`] is caused by a programmer error (the target type has a
    /// field that can't be bound), therefore it maps to `500 Internal Server Error`.
    /// Everything else is the caller's fault and maps to `400 Bad Request`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BindError::UnknownType(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BindError::Parse(_) | BindError::Shape(_) | BindError::CustomUnmarshal(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Attach the binding key of the field being processed, unless one is already set.
    pub(crate) fn at_key(mut self, key: &str) -> Self {
        let slot = match &mut self {
            BindError::UnknownType(e) => &mut e.key,
            BindError::Parse(e) => &mut e.key,
            BindError::Shape(e) => &mut e.key,
            BindError::CustomUnmarshal(e) => &mut e.key,
        };
        if slot.is_none() {
            *slot = Some(key.to_owned());
        }
        self
    }
}

#[derive(Debug)]
/// The target field has a type that can't be populated from a string.
///
/// This is a programmer error: open-ended maps, for example, have no schema we could use
/// to interpret the incoming values.
pub struct UnknownTypeError {
    pub(crate) key: Option<String>,
    pub(crate) type_name: &'static str,
}

impl UnknownTypeError {
    pub(crate) fn new(type_name: &'static str) -> Self {
        Self {
            key: None,
            type_name,
        }
    }

    /// The name of the type that can't be bound.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Display for UnknownTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(
                f,
                "`{key}` targets a field of type `{}`, which can't be bound from a string",
                self.type_name
            ),
            None => write!(
                f,
                "`{}` is not a supported type for binding",
                self.type_name
            ),
        }
    }
}

impl std::error::Error for UnknownTypeError {}

#[derive(Debug)]
/// A source value could not be parsed as the type of the target field.
///
/// The underlying parsing error is available via [`source`](std::error::Error::source).
pub struct ParseError {
    pub(crate) key: Option<String>,
    pub(crate) value: String,
    pub(crate) expected_type: &'static str,
    pub(crate) source: ParseErrorSource,
}

impl ParseError {
    pub(crate) fn new(
        value: &str,
        expected_type: &'static str,
        source: impl Into<ParseErrorSource>,
    ) -> Self {
        Self {
            key: None,
            value: value.to_owned(),
            expected_type,
            source: source.into(),
        }
    }

    /// The value that failed to parse.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The name of the type we tried to parse the value into.
    pub fn expected_type(&self) -> &'static str {
        self.expected_type
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ParseError {
            key,
            value,
            expected_type,
            ..
        } = self;
        match key {
            Some(key) => write!(
                f,
                "`{key}` is set to `{value}`, which can't be parsed as a `{expected_type}`"
            ),
            None => write!(f, "`{value}` can't be parsed as a `{expected_type}`"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(match &self.source {
            ParseErrorSource::Int(e) => e,
            ParseErrorSource::Float(e) => e,
            ParseErrorSource::Bool(e) => e,
            ParseErrorSource::Sign(e) => e,
        })
    }
}

#[derive(Debug)]
#[non_exhaustive]
/// The parser failure behind a [`ParseError`].
pub enum ParseErrorSource {
    /// An integer was malformed or out of range for its width.
    Int(ParseIntError),
    /// A floating point number was malformed.
    Float(ParseFloatError),
    /// A boolean was not one of the accepted spellings.
    Bool(InvalidBoolError),
    /// An unsigned integer was written with an explicit `+` sign.
    Sign(UnexpectedSignError),
}

impl From<ParseIntError> for ParseErrorSource {
    fn from(e: ParseIntError) -> Self {
        Self::Int(e)
    }
}

impl From<ParseFloatError> for ParseErrorSource {
    fn from(e: ParseFloatError) -> Self {
        Self::Float(e)
    }
}

impl From<InvalidBoolError> for ParseErrorSource {
    fn from(e: InvalidBoolError) -> Self {
        Self::Bool(e)
    }
}

impl From<UnexpectedSignError> for ParseErrorSource {
    fn from(e: UnexpectedSignError) -> Self {
        Self::Sign(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "expected one of `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false` or `False`"
)]
/// A string is not a recognised boolean literal.
pub struct InvalidBoolError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsigned integers can't be prefixed with a sign")]
/// An unsigned integer was prefixed with `+`.
pub struct UnexpectedSignError;

#[derive(Debug)]
/// A fixed-size target received a number of values different from its length.
///
/// Only `[T; N]` fields can raise this error: `Vec<T>` accepts any number of values.
pub struct ShapeError {
    pub(crate) key: Option<String>,
    pub(crate) values: Vec<String>,
    pub(crate) target_type: &'static str,
    pub(crate) expected_len: usize,
}

impl ShapeError {
    pub(crate) fn new(values: &[String], target_type: &'static str, expected_len: usize) -> Self {
        Self {
            key: None,
            values: values.to_vec(),
            target_type,
            expected_len,
        }
    }

    /// The values that were supplied.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The name of the fixed-size type we tried to populate.
    pub fn target_type(&self) -> &'static str {
        self.target_type
    }
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ShapeError {
            key,
            values,
            target_type,
            expected_len,
        } = self;
        if let Some(key) = key {
            write!(f, "`{key}` is set to ")?;
        }
        write!(
            f,
            "{values:?}, which is not a valid value for `{target_type}`: expected {expected_len} values, got {}",
            values.len()
        )
    }
}

impl std::error::Error for ShapeError {}

#[derive(Debug)]
/// A user-defined [`FromParam`](crate::FromParam) implementation rejected a value.
///
/// The original error is available, unchanged, via [`source`](std::error::Error::source).
pub struct CustomUnmarshalError {
    pub(crate) key: Option<String>,
    pub(crate) source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl CustomUnmarshalError {
    /// Consume this error, returning the error raised by the user-defined conversion.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self.source
    }
}

impl Display for CustomUnmarshalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "`{key}` could not be unmarshaled: {}", self.source),
            None => write!(f, "The value could not be unmarshaled: {}", self.source),
        }
    }
}

impl std::error::Error for CustomUnmarshalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// One of the path captures is not a valid UTF8 string once percent-decoded.
///
/// Path captures must be percent-encoded whenever they contain characters that are not
/// URL safe, e.g. whitespaces.
/// `/address/dirty%DE~%C7%1FY` decodes into a sequence of bytes that is not well-formed UTF8,
/// so it can't be used to build a [`SourceMap`](crate::SourceMap).
#[derive(Debug, thiserror::Error)]
#[error(
    "`{invalid_raw_segment}` cannot be used as `{invalid_key}` \
since it is not a well-formed UTF8 string when percent-decoded"
)]
pub struct DecodeError {
    pub(crate) invalid_key: String,
    pub(crate) invalid_raw_segment: String,
    #[source]
    pub(crate) source: Utf8Error,
}
