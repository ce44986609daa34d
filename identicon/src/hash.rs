use md5::{Digest, Md5};

/// Fixed digest length in bytes.
pub const DIGEST_LEN: usize = 16;

/// Hash an input string to its 16-byte digest.
///
/// MD5 is chosen for its fixed 128-bit output and wide availability, not
/// for any security property; collision resistance is irrelevant here.
pub fn digest(input: &str) -> [u8; DIGEST_LEN] {
    Md5::digest(input.as_bytes()).into()
}
