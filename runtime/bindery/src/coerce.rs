use serde::de::DeserializeOwned;

use crate::annotation::Namespace;
use crate::errors::{BindError, InvalidBoolError, ParseError, UnexpectedSignError};
use crate::source::SourceMap;
use crate::walk::BindField;

/// Build a value out of a single string coming from a [`SourceMap`].
///
/// `bindery` implements it for integers, floats, `bool` and `String`.
/// Implement it for your own types to bind them from their textual representation:
///
/// ```rust
/// use bindery::{BindError, FromParam};
///
/// #[derive(Default)]
/// pub struct Rgb(pub u8, pub u8, pub u8);
///
/// impl FromParam for Rgb {
///     fn from_param(value: &str) -> Result<Self, BindError> {
///         let hex = value.strip_prefix('#').ok_or_else(|| BindError::custom("missing `#`"))?;
///         let channel = |i: usize| {
///             hex.get(i..i + 2)
///                 .and_then(|c| u8::from_str_radix(c, 16).ok())
///                 .ok_or_else(|| BindError::custom(format!("`{value}` is not a colour")))
///         };
///         Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
///     }
/// }
/// ```
///
/// Errors should be built with [`BindError::custom`]: the wrapped error reaches the caller
/// unchanged.
/// A type can't both implement `FromParam` and derive [`Bind`](derive@crate::Bind).
///
/// # Empty values
///
/// The built-in numeric implementations treat an empty string as zero, and `bool` treats
/// it as `false`: `?page=` binds `page` to `0`.
///
/// # Signs
///
/// Signed integers and floats accept a leading `+` or `-`. Unsigned integers accept
/// neither: `+5` is rejected for a `u32`.
pub trait FromParam: Sized {
    /// Parse `value` into `Self`.
    fn from_param(value: &str) -> Result<Self, BindError>;
}

/// Convert a raw string into `T`.
pub fn coerce<T: FromParam>(raw: &str) -> Result<T, BindError> {
    T::from_param(raw)
}

impl<T> BindField for T
where
    T: FromParam,
{
    fn bind_field(
        &mut self,
        key: &str,
        source: &SourceMap,
        _namespace: Namespace,
    ) -> Result<bool, BindError> {
        let Some(values) = source.get(key) else {
            return Ok(false);
        };
        // Extra values are ignored; a key with no values binds like an empty string.
        let raw = values.first().map(String::as_str).unwrap_or_default();
        *self = coerce(raw).map_err(|e| e.at_key(key))?;
        Ok(true)
    }
}

macro_rules! from_param_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromParam for $ty {
                fn from_param(value: &str) -> Result<Self, BindError> {
                    let digits = if value.is_empty() { "0" } else { value };
                    digits
                        .parse::<$ty>()
                        .map_err(|e| BindError::Parse(ParseError::new(value, stringify!($ty), e)))
                }
            }
        )+
    };
}

macro_rules! from_param_unsigned {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromParam for $ty {
                fn from_param(value: &str) -> Result<Self, BindError> {
                    // `str::parse` tolerates a leading `+` for unsigned integers.
                    if value.starts_with('+') {
                        return Err(BindError::Parse(ParseError::new(
                            value,
                            stringify!($ty),
                            UnexpectedSignError,
                        )));
                    }
                    let digits = if value.is_empty() { "0" } else { value };
                    digits
                        .parse::<$ty>()
                        .map_err(|e| BindError::Parse(ParseError::new(value, stringify!($ty), e)))
                }
            }
        )+
    };
}

from_param_number!(i8, i16, i32, i64, i128, isize);
from_param_unsigned!(u8, u16, u32, u64, u128, usize);
from_param_number!(f32, f64);

impl FromParam for bool {
    fn from_param(value: &str) -> Result<Self, BindError> {
        match value {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "" | "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(BindError::Parse(ParseError::new(
                value,
                "bool",
                InvalidBoolError,
            ))),
        }
    }
}

impl FromParam for String {
    fn from_param(value: &str) -> Result<Self, BindError> {
        Ok(value.to_owned())
    }
}

/// Decode a field from a single value holding a JSON document.
///
/// ```rust
/// use bindery::{Bind, Json, SourceMap, Namespace};
///
/// #[derive(serde::Deserialize, Default)]
/// pub struct Window {
///     pub from: u32,
///     pub to: u32,
/// }
///
/// #[derive(Bind, Default)]
/// pub struct Search {
///     pub window: Json<Window>,
/// }
///
/// let source = SourceMap::from_query(r#"window={"from":1,"to":5}"#);
/// let mut search = Search::default();
/// bindery::bind(&mut search, &source, Namespace::Form).unwrap();
/// assert_eq!(search.window.0.to, 5);
/// ```
///
/// Decoding failures are reported as [`BindError::CustomUnmarshal`], wrapping the
/// [`serde_json::Error`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Json<T>(
    /// The decoded value.
    pub T,
);

impl<T> FromParam for Json<T>
where
    T: DeserializeOwned,
{
    fn from_param(value: &str) -> Result<Self, BindError> {
        serde_json::from_str(value)
            .map(Json)
            .map_err(BindError::custom)
    }
}
