use rand::RngCore;

/// Mint an opaque session token: 16 random bytes, hex-encoded. This is a
/// session handle the server records and looks up, not a signed credential;
/// nothing about the user is derivable from it.
pub fn mint_token() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_32_hex_chars() {
        let token = mint_token();
        assert_eq!(token.len(), 32);
        assert!(token.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = mint_token();
        let b = mint_token();
        assert_ne!(a, b);
    }
}
