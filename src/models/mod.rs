use serde::{Deserialize, Deserializer, Serialize};

/// A transaction as reported by the node, reduced to the fields we index.
///
/// Addresses and value are kept as the opaque strings the provider sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    // Contract creations have no recipient.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub to: String,
    pub value: String,
}

impl Transaction {
    pub fn new(
        hash: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            from: from.into(),
            to: to.into(),
            value: value.into(),
        }
    }
}

/// Canonical map key for an address.
pub fn normalize_address(address: &str) -> String {
    address.to_lowercase()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
