use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Inbound request body for `POST /api/address-tags`.
///
/// Fields default to empty lists so that a missing field reaches the
/// structural validator (which rejects empty lists) instead of failing at
/// deserialization with an opaque body-rejection error.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressTagRequest {
    /// EVM chain ids as decimal strings
    #[serde(default)]
    pub chains: Vec<String>,

    /// Addresses with `0x` prefix
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// Token metadata attached to an [`AddressTag`] when the address is a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAttributes {
    pub logo_url: String,
    pub token_symbol: String,
    pub decimals: u32,
}

/// Reconciled output record for one (address, chain) pair.
///
/// String fields are empty when absent, never null; `token_attributes` is
/// null unless the token registry yielded both a symbol and decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressTag {
    pub chain_id: String,
    pub project_name: String,
    pub name_tag: String,
    pub public_note: String,
    pub website_link: String,
    pub verified_domains: Vec<String>,
    pub token_attributes: Option<TokenAttributes>,
}

/// Response body for `POST /api/address-tags`: one single-entry map per
/// requested address, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressTagResponse {
    pub addresses: Vec<BTreeMap<String, Vec<AddressTag>>>,
}

/// One label/value pair from a registry item's metadata props.
///
/// The subgraph also returns `type`, `description` and `isIdentifier` per
/// prop; only label and value are read here and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropEntry {
    pub label: String,
    pub value: Option<String>,
}

/// Nested metadata object on a registry item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Composite `eip155:<chain>:<address>` key, the join key across registries.
    #[serde(default)]
    pub key0: String,

    #[serde(default)]
    pub props: Vec<PropEntry>,
}

/// One historical submission for a composite key within one registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryItem {
    /// Submission time used for recency ordering. The subgraph emits BigInt
    /// values as JSON strings; unparseable values order as 0.
    #[serde(
        rename = "latestRequestSubmissionTime",
        deserialize_with = "bigint_string",
        default
    )]
    pub submission_timestamp: u64,

    #[serde(default)]
    pub metadata: ItemMetadata,

    #[serde(rename = "itemID", default)]
    pub item_id: String,

    #[serde(rename = "registryAddress", default)]
    pub registry_address: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub disputed: bool,
}

/// The three named collections returned by one batched subgraph query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryResponse {
    #[serde(rename = "TagData", default)]
    pub tag_data: Vec<RegistryItem>,

    #[serde(rename = "TokenData", default)]
    pub token_data: Vec<RegistryItem>,

    #[serde(rename = "CdnData", default)]
    pub cdn_data: Vec<RegistryItem>,
}

/// Deserialize a subgraph BigInt that may arrive as a string or a number.
fn bigint_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n,
        Raw::Text(s) => s.parse().unwrap_or(0),
    })
}
