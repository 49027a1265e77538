#![deny(unsafe_code)]

use sha2::Digest;

/// Lowercase hex SHA-256, as written in a table manifest's `sha256` field.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}
