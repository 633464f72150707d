//! Batched subgraph query construction for the three Curate registries.
//!
//! One GraphQL document requests three named `litems` collections, each
//! filtered by membership of the item's composite key in the requested key
//! set, a fixed per-registry address, and an allow-listed status set.
//! Construction is pure; an empty key list simply produces an empty filter.

use crate::eip155;

/// Curate registry holding address tag submissions.
pub const TAG_REGISTRY: &str = "0x66260c69d03837016d88c9877e61e08ef74c59f2";

/// Curate registry holding token metadata submissions.
pub const TOKEN_REGISTRY: &str = "0xee1502e29795ef6c2d60f8d7120596abe3bad990";

/// Curate registry holding contract-domain (CDN) submissions.
pub const CDN_REGISTRY: &str = "0x957a53a994860be4750810131d9c876b2f52d6e1";

/// Item statuses eligible for inclusion: accepted entries plus entries with
/// a pending removal request (still live until the request clears).
pub const VALID_STATUSES: [&str; 2] = ["Registered", "ClearingRequested"];

/// Composite keys for every (chain, address) permutation, chain-major, in
/// caller-supplied order. Duplicate inputs produce duplicate keys; the
/// subgraph `_in` filter is unaffected.
pub fn eip155_keys(chains: &[String], addresses: &[String]) -> Vec<String> {
    let mut keys = Vec::with_capacity(chains.len() * addresses.len());
    for chain_id in chains {
        for address in addresses {
            keys.push(eip155::encode(chain_id, address));
        }
    }
    keys
}

/// Build the batched query document for the given composite keys.
pub fn build_query(keys: &[String]) -> String {
    // serde_json renders the string arrays with the quoting GraphQL expects.
    let keys_json = serde_json::to_string(keys).unwrap_or_else(|_| "[]".to_string());
    let statuses_json =
        serde_json::to_string(&VALID_STATUSES).unwrap_or_else(|_| "[]".to_string());

    let collection = |name: &str, registry: &str| {
        format!(
            r#"
        {name}: litems(
          where: {{
            metadata_: {{ key0_in: {keys_json} }}
            registry: "{registry}"
            status_in: {statuses_json}
          }}
        ) {{
          latestRequestSubmissionTime
          metadata {{
            key0
            props {{
              value
              type
              label
              description
              isIdentifier
            }}
          }}
          itemID
          registryAddress
          status
          disputed
        }}"#
        )
    };

    format!(
        "{{{}\n{}\n{}\n      }}",
        collection("TagData", TAG_REGISTRY),
        collection("TokenData", TOKEN_REGISTRY),
        collection("CdnData", CDN_REGISTRY)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keys_are_chain_major_product() {
        let keys = eip155_keys(
            &strings(&["1", "100"]),
            &strings(&["0xaaa", "0xbbb"]),
        );
        assert_eq!(
            keys,
            vec![
                "eip155:1:0xaaa",
                "eip155:1:0xbbb",
                "eip155:100:0xaaa",
                "eip155:100:0xbbb",
            ]
        );
    }

    #[test]
    fn duplicate_inputs_are_not_deduplicated() {
        let keys = eip155_keys(&strings(&["1", "1"]), &strings(&["0xaaa"]));
        assert_eq!(keys, vec!["eip155:1:0xaaa", "eip155:1:0xaaa"]);
    }

    #[test]
    fn query_names_all_three_collections() {
        let query = build_query(&strings(&["eip155:1:0xaaa"]));
        assert!(query.contains("TagData: litems"));
        assert!(query.contains("TokenData: litems"));
        assert!(query.contains("CdnData: litems"));
    }

    #[test]
    fn query_filters_by_registry_keys_and_status() {
        let query = build_query(&strings(&["eip155:1:0xaaa", "eip155:100:0xbbb"]));
        assert!(query.contains(TAG_REGISTRY));
        assert!(query.contains(TOKEN_REGISTRY));
        assert!(query.contains(CDN_REGISTRY));
        assert!(query.contains(r#"key0_in: ["eip155:1:0xaaa","eip155:100:0xbbb"]"#));
        assert!(query.contains(r#"status_in: ["Registered","ClearingRequested"]"#));
    }

    #[test]
    fn empty_key_list_builds_trivial_filter() {
        let query = build_query(&[]);
        assert!(query.contains("key0_in: []"));
    }
}
