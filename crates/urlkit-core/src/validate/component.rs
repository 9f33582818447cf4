//! Per-component checks behind the grammar validator.

use crate::grammar;

/// Characters a path may never contain literally.
const PATH_FORBIDDEN: [char; 10] = ['<', '>', '"', ' ', '{', '}', '|', '\\', '^', '`'];

pub(crate) fn valid_scheme(scheme: &str) -> bool {
    !scheme.is_empty() && grammar::SCHEME.is_match(scheme)
}

/// A host is a dotted-quad with octets in 0-255, or a domain name of
/// alphanumeric/hyphen labels ending in a top label of at least two letters.
pub(crate) fn valid_host(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    if grammar::IPV4.is_match(host) {
        return host
            .split('.')
            .all(|octet| octet.parse::<u32>().map(|n| n <= 255).unwrap_or(false));
    }
    grammar::DOMAIN.is_match(host)
}

/// Port is optional; when present it must be an integer in 1-65535.
pub(crate) fn valid_port(port: &str) -> bool {
    if port.is_empty() {
        return true;
    }
    port.parse::<u32>()
        .map(|n| (1..=65535).contains(&n))
        .unwrap_or(false)
}

/// Path is optional; when present it must not contain forbidden characters.
pub(crate) fn valid_path(path: &str) -> bool {
    if path.is_empty() {
        return true;
    }
    !path.chars().any(|c| PATH_FORBIDDEN.contains(&c))
}
