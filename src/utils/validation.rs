// Structural form checks run client-side before submission. Anything the
// server rejects afterwards is shown verbatim.

pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose email shape check: something@something.something
pub fn is_email(value: &str) -> bool {
    let trimmed = value.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_whitespace_only() {
        assert!(is_required("Dr Doe"));
        assert!(!is_required("   "));
        assert!(!is_required(""));
    }

    #[test]
    fn email_shape() {
        assert!(is_email("j.doe@hospital.org"));
        assert!(is_email("  padded@example.com  "));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@nodot"));
        assert!(!is_email("a@b@c.com"));
    }

    #[test]
    fn min_length_counts_chars_after_trim() {
        assert!(has_min_length("abcdef", 6));
        assert!(!has_min_length(" abc  ", 4));
    }
}
