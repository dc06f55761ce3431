//! Token generation and email validation

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of a confirmation token in characters
const TOKEN_LENGTH: usize = 48;

/// Generate a random confirmation token.
///
/// 48 alphanumeric characters drawn from the thread-local CSPRNG,
/// well past the 32 bytes of entropy a single-use email credential needs.
pub fn generate_confirmation_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Check that a string has the basic `local@domain.tld` shape.
///
/// Not an RFC 5321 parser. Good enough to stop empty strings, missing
/// domains, and obvious garbage before they reach the store.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least one dot with non-empty labels on both sides
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_charset() {
        for _ in 0..100 {
            let token = generate_confirmation_token();
            assert_eq!(token.len(), TOKEN_LENGTH);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_token_uniqueness() {
        let t1 = generate_confirmation_token();
        let t2 = generate_confirmation_token();
        assert_ne!(t1, t2);
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@test.com"));
        assert!(is_valid_email("User@Example.com"));
        assert!(is_valid_email("a.b+c@mail.example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("alice@nodot"));
        assert!(!is_valid_email("alice@example."));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email("alice @example.com"));
        assert!(!is_valid_email("alice@exa mple.com"));
    }
}
