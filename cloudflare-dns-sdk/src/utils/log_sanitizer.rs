//! Keeps record payloads and credentials out of logs in full.
//!
//! Response bodies can carry DKIM keys and certificates; request headers
//! carry the API token.

/// Maximum number of bytes of a body included in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Characters of a token left visible at each end by [`mask_token`].
const TOKEN_VISIBLE: usize = 4;

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Shorten `s` to [`TRUNCATE_LIMIT`] bytes, noting the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Hide all but the first and last few characters of a credential.
///
/// Short tokens are hidden entirely.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= TOKEN_VISIBLE * 2 {
        return "*".repeat(chars.len().max(3));
    }
    let head: String = chars[..TOKEN_VISIBLE].iter().collect();
    let tail: String = chars[chars.len() - TOKEN_VISIBLE..].iter().collect();
    format!("{head}***{tail}")
}
