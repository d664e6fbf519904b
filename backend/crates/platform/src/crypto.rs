//! Cryptographic Utilities

use md5::Md5;
use rand::{RngCore, rngs::OsRng};
use sha1::{Digest, Sha1};

/// Length of a SHA-1 digest rendered as hex
pub const SHA1_HEX_LEN: usize = 40;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate `len` random bytes rendered as lowercase hex
pub fn random_hex(len: usize) -> String {
    hex::encode(random_bytes(len))
}

/// Compute SHA-1 over the concatenation of `parts`, as lowercase hex
///
/// Feeding the parts separately avoids building the joined buffer; the
/// digest is identical to hashing the concatenated bytes.
pub fn sha1_hex(parts: &[&[u8]]) -> String {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

/// Compute MD5 as lowercase hex
///
/// Only for public identifiers such as avatar URLs, never for secrets.
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Whether `s` is a lowercase hex SHA-1 digest
pub fn is_sha1_hex(s: &str) -> bool {
    s.len() == SHA1_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
