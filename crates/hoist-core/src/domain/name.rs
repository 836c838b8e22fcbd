//! Name-format rule shared by stacks and services.

/// Longest name accepted (a DNS label).
pub const MAX_NAME_LEN: usize = 63;

/// Check a name against the subdomain-label rule.
///
/// Valid names are 1-63 characters of `[a-z0-9-]` whose first and last
/// characters are a lowercase letter or digit.
pub fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();

    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return false;
    };

    bytes.len() <= MAX_NAME_LEN
        && is_alphanumeric(first)
        && is_alphanumeric(last)
        && bytes.iter().all(|&b| is_alphanumeric(b) || b == b'-')
}

fn is_alphanumeric(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}
