//! Response reconciler — joins the three flat registry collections into
//! per-address, per-chain [`AddressTag`] records.
//!
//! For every requested (address, chain) pair, in caller-supplied order:
//! tag and token registries resolve to the single most recent submission
//! ("latest wins"), the CDN registry contributes every matching item's
//! domain (deduplicated, first-seen order). A chain is emitted only when at
//! least one registry matched; an address is always present in the output,
//! possibly mapped to an empty list.

use std::collections::BTreeMap;

use tagscout_common::types::{
    AddressTag, AddressTagResponse, PropEntry, RegistryItem, RegistryResponse, TokenAttributes,
};

use crate::eip155;

/// Public IPFS gateway used to resolve `/ipfs/...` logo paths.
const IPFS_GATEWAY: &str = "https://ipfs.io";

/// Property labels read from tag registry items.
const LABEL_PROJECT_NAME: &str = "Project Name";
const LABEL_NAME_TAG: &str = "Public Name Tag";
const LABEL_PUBLIC_NOTE: &str = "Public Note";
const LABEL_WEBSITE_LINK: &str = "UI/Website Link";

/// Property labels read from token and CDN registry items.
const LABEL_SYMBOL: &str = "Symbol";
const LABEL_DECIMALS: &str = "Decimals";
const LABEL_LOGO: &str = "Logo";
const LABEL_DOMAIN_NAME: &str = "Domain name";

/// Reconcile one registry snapshot against the requested chains and
/// addresses. Pure; identical inputs produce identical output.
pub fn reconcile(
    response: &RegistryResponse,
    chains: &[String],
    addresses: &[String],
) -> AddressTagResponse {
    let mut result = Vec::with_capacity(addresses.len());

    for address in addresses {
        let mut tags: Vec<AddressTag> = Vec::new();

        for chain_id in chains {
            let key = eip155::encode(chain_id, address);

            let tag_item = latest_item(&response.tag_data, &key);
            let token_item = latest_item(&response.token_data, &key);
            let cdn_items = matching_items(&response.cdn_data, &key);

            // A chain with no data across all three registries is omitted
            // from this address's list entirely.
            if tag_item.is_none() && token_item.is_none() && cdn_items.is_empty() {
                continue;
            }

            tags.push(AddressTag {
                chain_id: chain_id.clone(),
                project_name: tag_field(tag_item, LABEL_PROJECT_NAME),
                name_tag: tag_field(tag_item, LABEL_NAME_TAG),
                public_note: tag_field(tag_item, LABEL_PUBLIC_NOTE),
                website_link: tag_field(tag_item, LABEL_WEBSITE_LINK),
                verified_domains: collect_domains(&cdn_items),
                token_attributes: token_item.and_then(token_attributes),
            });
        }

        // Addresses are never dropped, only their tag lists may be empty.
        let mut entry = BTreeMap::new();
        entry.insert(address.clone(), tags);
        result.push(entry);
    }

    AddressTagResponse { addresses: result }
}

/// First-match property lookup over the flat props list.
///
/// Labels are not guaranteed unique within one item; the first occurrence
/// wins. This mirrors the registry's observed contract and is deliberately
/// order-dependent.
fn prop_value<'a>(props: &'a [PropEntry], label: &str) -> &'a str {
    props
        .iter()
        .find(|prop| prop.label == label)
        .and_then(|prop| prop.value.as_deref())
        .unwrap_or("")
}

/// The most recent submission for `key`, or `None` if nothing matched.
///
/// Ties on `submission_timestamp` resolve to the first item in source
/// order: only a strictly greater timestamp displaces the current winner.
fn latest_item<'a>(items: &'a [RegistryItem], key: &str) -> Option<&'a RegistryItem> {
    let mut winner: Option<&RegistryItem> = None;
    for item in items.iter().filter(|item| item.metadata.key0 == key) {
        match winner {
            Some(current) if item.submission_timestamp <= current.submission_timestamp => {}
            _ => winner = Some(item),
        }
    }
    winner
}

/// Every item matching `key`, in source order. CDN entries are multi-valued
/// so no latest-only selection applies.
fn matching_items<'a>(items: &'a [RegistryItem], key: &str) -> Vec<&'a RegistryItem> {
    items
        .iter()
        .filter(|item| item.metadata.key0 == key)
        .collect()
}

/// A tag field from the winning tag item, or `""` when there is no winner
/// or the label is absent.
fn tag_field(item: Option<&RegistryItem>, label: &str) -> String {
    item.map(|item| prop_value(&item.metadata.props, label).to_string())
        .unwrap_or_default()
}

/// Domain names across all matching CDN items: first-seen order, empty
/// values skipped, duplicates dropped.
fn collect_domains(items: &[&RegistryItem]) -> Vec<String> {
    let mut domains: Vec<String> = Vec::new();
    for item in items {
        let domain = prop_value(&item.metadata.props, LABEL_DOMAIN_NAME);
        if !domain.is_empty() && !domains.iter().any(|seen| seen == domain) {
            domains.push(domain.to_string());
        }
    }
    domains
}

/// Token attributes from the winning token item.
///
/// Both "Symbol" and "Decimals" must be non-empty or the attributes are
/// absent entirely. Decimals parse best-effort with a silent fallback to 0
/// (part of the observed contract, not a hard failure). IPFS logo paths are
/// rewritten to a gateway URL; anything else passes through unchanged.
fn token_attributes(item: &RegistryItem) -> Option<TokenAttributes> {
    let props = &item.metadata.props;
    let symbol = prop_value(props, LABEL_SYMBOL);
    let decimals = prop_value(props, LABEL_DECIMALS);

    if symbol.is_empty() || decimals.is_empty() {
        return None;
    }

    let logo = prop_value(props, LABEL_LOGO);
    let logo_url = if logo.starts_with("/ipfs/") {
        format!("{IPFS_GATEWAY}{logo}")
    } else {
        logo.to_string()
    };

    Some(TokenAttributes {
        logo_url,
        token_symbol: symbol.to_string(),
        decimals: decimals.parse().unwrap_or(0),
    })
}
