//! Lenient field decoders shared by the manifest entities.

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`.
///
/// Text fields go through `String`'s own deserializer, so a YAML plain
/// scalar such as `1e3`, `0x1f` or `0.10` keeps its literal spelling.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
