use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

static BASE58_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").unwrap());

/// Validate a wallet typed by the user and return it trimmed.
pub fn validate_wallet(input: &str) -> Result<String> {
    let wallet = input.trim();

    if wallet.is_empty() {
        return Err(Error::Validation(
            "Please enter a wallet address".to_string(),
        ));
    }

    if !BASE58_ADDRESS.is_match(wallet) {
        return Err(Error::Validation(format!(
            "'{}' is not a valid Solana address (expected 32-44 base58 characters)",
            wallet
        )));
    }

    Ok(wallet.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_base58_address() {
        let wallet = validate_wallet("  9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin ").unwrap();
        assert_eq!(wallet, "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(matches!(validate_wallet(""), Err(Error::Validation(_))));
        assert!(matches!(validate_wallet("   \t"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_rejects_non_base58_characters() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet
        let with_zero = "0xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";
        assert!(validate_wallet(with_zero).is_err());
        assert!(validate_wallet("short").is_err());
    }
}
