//! Random alias generation.
//!
//! Aliases are drawn uniformly, with replacement, from the 62 ASCII
//! alphanumerics (`a-z`, `A-Z`, `0-9`). The generator does not check for
//! uniqueness; collisions are reported by the store's unique constraint.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Alias length used when the client does not supply one.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Generates a random alias of exactly `length` characters.
///
/// Uses the thread-local CSPRNG seeded from the OS.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
