//! Opaque record identifier generation.
//!
//! Provides cryptographically secure random identifiers for store records
//! (creators, offers, pages, purchases) and mock checkout sessions.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Generates an opaque record id with the given prefix.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing ids like `purchase-3kTMd21qxZos`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_id("purchase");
/// assert!(id.starts_with("purchase-"));
/// ```
pub fn generate_id(prefix: &str) -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    format!(
        "{}-{}",
        prefix,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
    )
}
