//! Short id generation.
//!
//! A candidate id is derived from the target URL salted with fresh OS entropy,
//! hashed with SHA-256 and expanded into base62 digits. The salt makes every
//! call unpredictable from the URL alone, so retries after a collision draw a
//! new candidate.

use crate::domain::generator::IdGenerator;
use sha2::{Digest, Sha256};

/// Symbols used for short ids, indexed by base62 digit value.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default number of characters in a short id.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Longest id whose every digit is drawn from the 64-bit digest prefix.
///
/// 62^10 < 2^64 < 62^11.
pub const MAX_ID_LENGTH: usize = 10;

/// Number of random salt bytes mixed into each seed.
const SALT_BYTES: usize = 8;

/// Generates a fresh short id for `url`.
///
/// # Panics
///
/// Panics if the system random number generator fails. There is no sensible
/// way to continue allocating ids without entropy.
///
/// # Examples
///
/// ```ignore
/// let id = generate_short_id("https://example.com/a", 6);
/// assert_eq!(id.len(), 6);
/// ```
pub fn generate_short_id(url: &str, length: usize) -> String {
    let mut salt = [0u8; SALT_BYTES];

    getrandom::fill(&mut salt).expect("Failed to generate random bytes");

    short_id_from_seed(url, &salt, length)
}

/// Derives a short id from `url` and an explicit salt.
///
/// The salt is hex-encoded and appended to the URL, the result is hashed with
/// SHA-256 and the first 8 digest bytes (16 hex characters) are read as a
/// big-endian integer before base62 expansion.
pub fn short_id_from_seed(url: &str, salt: &[u8], length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(hex::encode(salt).as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);

    encode_base62(u64::from_be_bytes(prefix), length)
}

/// Writes exactly `length` base62 digits of `value`, least significant first.
///
/// Digits beyond the magnitude of `value` come out as `ALPHABET[0]`.
pub fn encode_base62(mut value: u64, length: usize) -> String {
    let mut id = String::with_capacity(length);

    for _ in 0..length {
        id.push(ALPHABET[(value % 62) as usize] as char);
        value /= 62;
    }

    id
}

/// Production [`IdGenerator`] backed by [`generate_short_id`].
#[derive(Debug, Clone, Copy)]
pub struct Sha256IdGenerator {
    length: usize,
}

impl Sha256IdGenerator {
    /// Creates a generator emitting ids of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for Sha256IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for Sha256IdGenerator {
    fn generate(&self, url: &str) -> String {
        generate_short_id(url, self.length)
    }
}
