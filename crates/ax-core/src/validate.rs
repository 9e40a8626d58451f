//! Syntax checks for user-supplied domains, backend targets, and tokens.
//!
//! Pure functions returning typed reasons. The `Display` text of
//! [`InvalidInput`] doubles as the re-ask message shown by interactive
//! prompts, so the wording is user-facing.

use thiserror::Error;

/// Required length of an account bearer token.
pub const TOKEN_LEN: usize = 44;

/// Reason an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Domain name must be between 3 and 253 characters long")]
    DomainLength,

    #[error("Domain name must include a TLD (e.g., example.com)")]
    MissingTld,

    #[error("Domain name must be a valid domain name")]
    BadLabel,

    #[error("Please enter a valid domain name or IP address (e.g., example.com or 192.168.1.1)")]
    BadTarget,

    #[error("Token must be exactly 44 characters long")]
    TokenLength,
}

/// Check a domain name the user wants the control plane to manage.
///
/// Accepts when the overall length is within [3, 253], at least one
/// `.`-separated TLD segment exists, and the first label is alphanumeric
/// with optional interior hyphens (max 63 chars). Labels past the first
/// are not inspected.
pub fn validate_domain(value: &str) -> Result<(), InvalidInput> {
    if value.len() < 3 || value.len() > 253 {
        return Err(InvalidInput::DomainLength);
    }

    let mut parts = value.split('.');
    let first = parts.next().unwrap_or_default();
    if parts.next().is_none() {
        return Err(InvalidInput::MissingTld);
    }

    if is_label(first) {
        Ok(())
    } else {
        Err(InvalidInput::BadLabel)
    }
}

/// Check a backend target: a hostname or an IPv4 address, with an optional
/// `http://`/`https://` prefix that is ignored.
///
/// Known limitation: the dotted-quad branch does not range-check octets.
/// Any four `.`-separated runs of one to three digits pass, so
/// `999.999.999.999` is accepted.
pub fn validate_target(value: &str) -> Result<(), InvalidInput> {
    let host = strip_scheme(value);
    if is_hostname_like(host) || is_dotted_quad(host) {
        Ok(())
    } else {
        Err(InvalidInput::BadTarget)
    }
}

/// Check an account token's length (tokens are otherwise opaque).
pub fn validate_token(value: &str) -> Result<(), InvalidInput> {
    if value.chars().count() == TOKEN_LEN {
        Ok(())
    } else {
        Err(InvalidInput::TokenLength)
    }
}

/// Strip a leading `http://` or `https://` prefix, if present.
pub fn strip_scheme(value: &str) -> &str {
    value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value)
}

/// One DNS label: 1-63 chars, alphanumeric at both ends, interior chars
/// alphanumeric or `-`.
fn is_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.len() > 63 {
        return false;
    }
    match bytes {
        [] => false,
        [only] => only.is_ascii_alphanumeric(),
        [first, middle @ .., last] => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && middle.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-')
        }
    }
}

/// Loose hostname shape: at least two chars, alphanumeric at both ends,
/// interior chars from `[A-Za-z0-9._-]`. Dots are interior chars, so this
/// covers multi-label names in one pass.
fn is_hostname_like(host: &str) -> bool {
    // The slice pattern needs two elements, so one-char hosts fall out here.
    let [first, middle @ .., last] = host.as_bytes() else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && middle
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.')
}

/// Four `.`-separated runs of 1-3 digits. No octet range check.
fn is_dotted_quad(host: &str) -> bool {
    let mut groups = 0usize;
    for part in host.split('.') {
        groups += 1;
        if groups > 4
            || part.is_empty()
            || part.len() > 3
            || !part.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
    }
    groups == 4
}
