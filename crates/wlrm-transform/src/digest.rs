#![deny(unsafe_code)]

use md5::Digest;

/// Lowercase hex MD5 of `input`. Used for name uniqueness only.
pub fn md5_hex(input: &str) -> String {
    let digest = md5::Md5::digest(input.as_bytes());
    hex::encode(digest)
}
