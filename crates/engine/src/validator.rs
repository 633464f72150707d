//! Request validation: structural well-formedness first, business limits
//! second. Each layer rejects independently; the first violation found
//! aborts with an error naming the offending value.

use tagscout_common::error::AppError;
use tagscout_common::types::AddressTagRequest;

/// Maximum addresses accepted per request.
pub const MAX_ADDRESSES: usize = 100;

/// Maximum chains accepted per request.
pub const MAX_CHAINS: usize = 50;

/// Structural validation: both lists present and non-empty, every chain id
/// a positive decimal integer, every address 40 hex digits with `0x` prefix.
pub fn validate_structure(request: &AddressTagRequest) -> Result<(), AppError> {
    if request.chains.is_empty() {
        return Err(AppError::Validation(
            "chains must be a non-empty array".to_string(),
        ));
    }

    if request.addresses.is_empty() {
        return Err(AppError::Validation(
            "addresses must be a non-empty array".to_string(),
        ));
    }

    for chain_id in &request.chains {
        if !is_valid_chain_id(chain_id) {
            return Err(AppError::Validation(format!(
                "Invalid chain ID: {chain_id}. Chain IDs must be positive numeric strings"
            )));
        }
    }

    for address in &request.addresses {
        if !is_valid_address(address) {
            return Err(AppError::Validation(format!(
                "Invalid address: {address}. Addresses must be valid Ethereum addresses with 0x prefix"
            )));
        }
    }

    Ok(())
}

/// Business limits, checked only after structural validation passes.
pub fn validate_limits(request: &AddressTagRequest) -> Result<(), AppError> {
    if request.addresses.len() > MAX_ADDRESSES {
        return Err(AppError::BusinessLimit(format!(
            "Maximum {MAX_ADDRESSES} addresses allowed per request"
        )));
    }

    if request.chains.len() > MAX_CHAINS {
        return Err(AppError::BusinessLimit(format!(
            "Maximum {MAX_CHAINS} chains allowed per request"
        )));
    }

    Ok(())
}

/// `^\d+$` and parses to a positive integer.
fn is_valid_chain_id(chain_id: &str) -> bool {
    !chain_id.is_empty()
        && chain_id.bytes().all(|b| b.is_ascii_digit())
        && chain_id.parse::<u64>().is_ok_and(|n| n > 0)
}

/// `^0x[0-9a-fA-F]{40}$`
fn is_valid_address(address: &str) -> bool {
    address.len() == 42
        && address.starts_with("0x")
        && address[2..].bytes().all(|b| b.is_ascii_hexdigit())
}
