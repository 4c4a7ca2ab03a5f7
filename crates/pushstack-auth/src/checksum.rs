//! Request body checksum computation.
//!
//! The REST wire protocol carries an MD5 digest of the raw request body in
//! the `body_md5` query parameter. MD5 is retained solely for compatibility
//! with the server-side verification scheme; it is an integrity token, not
//! a security signature, and must not be relied on as collision-resistant.

use digest::Digest;

/// Compute the hex-encoded MD5 digest of the request body.
///
/// Returns exactly 32 lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use pushstack_auth::checksum::body_md5;
///
/// assert_eq!(body_md5(b""), "d41d8cd98f00b204e9800998ecf8427e");
/// assert_eq!(body_md5(b"hello"), "5d41402abc4b2a76b9719d911017c592");
/// ```
#[must_use]
pub fn body_md5(body: &[u8]) -> String {
    hex::encode(md5::Md5::digest(body))
}
