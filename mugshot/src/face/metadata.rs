use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{map_serialization_error, MugshotResult};

/// Caller-defined data stored alongside a face record. Opaque to the client.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Encodes metadata as the JSON text sent in the `metadata` form field.
pub(crate) fn encode_metadata<M>(metadata: &M) -> MugshotResult<String>
where
    M: Serialize + ?Sized,
{
    serde_json::to_string(metadata).map_err(map_serialization_error)
}

/// Treats an explicit JSON `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
