use serde::{Deserialize, Deserializer};

/// Deserializes a field that may be absent, `null`, or a value.
///
/// Used with `#[serde(default, deserialize_with = "nullable")]` so that a
/// missing key stays `None` while an explicit `null` becomes `Some(None)`.
/// Partial updates rely on the difference: absent leaves a reference
/// untouched, `null` clears it.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
