use std::any::type_name;
use std::collections::{BTreeMap, HashMap};

use crate::annotation::Namespace;
use crate::coerce::{FromParam, coerce};
use crate::errors::{BindError, ShapeError, UnknownTypeError};
use crate::source::SourceMap;
use crate::walk::BindField;

/// Coerce each value into a `T`, preserving their order.
///
/// Any number of values, including zero, is accepted.
pub fn build_sequence<T: FromParam>(values: &[String]) -> Result<Vec<T>, BindError> {
    values.iter().map(|value| coerce(value)).collect()
}

/// Coerce exactly `N` values into a `[T; N]`.
///
/// If the number of values doesn't match `N`, a [`ShapeError`] is returned.
pub fn build_array<T: FromParam, const N: usize>(values: &[String]) -> Result<[T; N], BindError> {
    if values.len() != N {
        return Err(BindError::Shape(ShapeError::new(
            values,
            type_name::<[T; N]>(),
            N,
        )));
    }
    let elements = build_sequence::<T>(values)?;
    // The length was checked above, the conversion can't fail.
    elements
        .try_into()
        .map_err(|_| BindError::Shape(ShapeError::new(values, type_name::<[T; N]>(), N)))
}

impl<T> BindField for Vec<T>
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
        *self = build_sequence(values).map_err(|e| e.at_key(key))?;
        Ok(true)
    }
}

impl<T, const N: usize> BindField for [T; N]
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
        *self = build_array(values).map_err(|e| e.at_key(key))?;
        Ok(true)
    }
}

// Open-ended maps have no schema to interpret a flat list of strings with.
// Structs holding them can still be bound, as long as no key targets the map itself.
macro_rules! unknown_type {
    ($($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> BindField for $ty<$($param),+> {
                fn bind_field(
                    &mut self,
                    key: &str,
                    source: &SourceMap,
                    _namespace: Namespace,
                ) -> Result<bool, BindError> {
                    if !source.contains_key(key) {
                        return Ok(false);
                    }
                    Err(BindError::UnknownType(UnknownTypeError::new(type_name::<Self>())).at_key(key))
                }
            }
        )+
    };
}

unknown_type!(HashMap<K, V, S>, BTreeMap<K, V>);
