//! EIP-155 composite key codec.
//!
//! Registry entries are correlated with requested (chain, address) pairs
//! through a `eip155:<chainId>:<address>` string key. The codec is total:
//! any input decodes, malformed keys yield empty segments.

/// Render a (chain id, address) pair as a composite key.
///
/// No escaping is performed; callers guarantee neither segment contains `:`.
pub fn encode(chain_id: &str, address: &str) -> String {
    format!("eip155:{chain_id}:{address}")
}

/// Chain id segment of a composite key, or `""` if the key has fewer than
/// two `:`-separated segments.
pub fn decode_chain_id(key: &str) -> &str {
    key.split(':').nth(1).unwrap_or("")
}

/// Address segment of a composite key, or `""` if the key has fewer than
/// three `:`-separated segments.
pub fn decode_address(key: &str) -> &str {
    key.split(':').nth(2).unwrap_or("")
}
