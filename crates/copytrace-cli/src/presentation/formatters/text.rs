/// `first8...last8` for signatures and addresses longer than 16 characters.
pub fn truncate_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= 16 {
        return hash.to_string();
    }

    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

pub fn solscan_tx_url(signature: &str) -> String {
    format!("https://solscan.io/tx/{}", signature)
}
