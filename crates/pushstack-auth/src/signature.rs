//! The HMAC-SHA256 signing primitive.
//!
//! Every credential this crate produces is derived from a single trust
//! primitive:
//!
//! ```text
//! Signature = lowercase_hex(HMAC-SHA256(secret, signing_input))
//! ```
//!
//! The signing input construction rules live in [`crate::canonical`],
//! [`crate::rest`], and [`crate::channel`]; this module only computes and
//! compares digests.

use digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 signature of `message` keyed by `secret`.
///
/// Returns the digest as exactly 64 lowercase hexadecimal characters, with
/// no separators or prefix. The output is fully determined by the inputs.
///
/// # Examples
///
/// ```
/// use pushstack_auth::signature::sign;
///
/// let signature = sign(b"secret", b"data");
/// assert_eq!(
///     signature,
///     "1b2c16b75bd2a870c114153ccda5bcfca63314bc722fa160d690de133ccbb9db"
/// );
/// ```
#[must_use]
pub fn sign(secret: &[u8], message: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can accept keys of any length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Check a provided hex signature against the signature of `message`.
///
/// The comparison is constant-time to prevent timing attacks. This is the
/// verification-side counterpart of [`sign`]: the server re-derives the
/// signature from the same signing input and compares.
#[must_use]
pub fn verify(secret: &[u8], message: &[u8], provided_signature: &str) -> bool {
    let expected = sign(secret, message);
    provided_signature
        .as_bytes()
        .ct_eq(expected.as_bytes())
        .into()
}
