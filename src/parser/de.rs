use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be written as YAML `null`, mapping it to the
/// type's default value.
///
/// Subscriptions frequently carry keys such as `password: ~` or `udp:` with
/// no value. Those are treated exactly like a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
