//! REST request authentication.
//!
//! Server-to-server REST calls are authenticated by signing a canonical
//! rendering of the full query parameter set:
//!
//! 1. Add the reserved parameters `auth_key`, `auth_timestamp`,
//!    `auth_version`, and `body_md5` to the caller's parameters.
//! 2. Sort the full set by key in byte-wise lexicographic order.
//! 3. Render the sorted set as a canonical query string.
//! 4. Sign `METHOD\nPATH\nCANONICAL_QUERY_STRING`.
//! 5. Prepend `auth_signature` to the sorted list.
//!
//! The returned list is ready to be serialized into a query string; the
//! caller percent-encodes values when embedding them into an actual URL
//! (only the raw bytes are signed).

use tracing::debug;

use crate::canonical::{build_canonical_query_string, build_signing_input, sort_params};
use crate::checksum::body_md5;
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::signature::{sign, verify};

/// Reserved parameter: the application key.
pub const AUTH_KEY: &str = "auth_key";
/// Reserved parameter: the request timestamp in decimal Unix seconds.
pub const AUTH_TIMESTAMP: &str = "auth_timestamp";
/// Reserved parameter: the auth scheme version.
pub const AUTH_VERSION: &str = "auth_version";
/// Reserved parameter: the hex MD5 digest of the raw request body.
pub const BODY_MD5: &str = "body_md5";
/// Reserved parameter: the request signature. Appended last, never signed.
pub const AUTH_SIGNATURE: &str = "auth_signature";

/// The only auth scheme version emitted by this implementation.
const AUTH_VERSION_VALUE: &str = "1.0";

/// Build the signed query parameter list for a REST request.
///
/// `timestamp` is caller-supplied Unix seconds; this function never reads a
/// clock, keeping it pure and testable. `extra_params` must not contain
/// duplicate keys or keys colliding with the reserved `auth_*`/`body_md5`
/// names. Collisions are not checked and produce a deterministic but
/// unverifiable signature.
///
/// The returned list is the byte-wise key-sorted parameter set with
/// `auth_signature` prepended. Request semantics are not validated: an
/// empty path or lowercase method is signed as-is and will simply fail
/// server-side verification.
///
/// # Examples
///
/// ```
/// use pushstack_auth::{Credentials, build_auth_params};
///
/// let credentials = Credentials::new("278d425bdf160c739803", "7ad3773142a6692b25b8");
/// let params = build_auth_params(&credentials, "POST", "/some/path", &[], b"", 1_000_000_000);
///
/// assert_eq!(params.len(), 5);
/// assert_eq!(params[0].0, "auth_signature");
/// assert_eq!(params[1], ("auth_key".to_owned(), "278d425bdf160c739803".to_owned()));
/// ```
#[must_use]
pub fn build_auth_params(
    credentials: &Credentials,
    method: &str,
    path: &str,
    extra_params: &[(String, String)],
    body: &[u8],
    timestamp: u64,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = extra_params.to_vec();
    params.push((AUTH_KEY.to_owned(), credentials.key().to_owned()));
    params.push((AUTH_TIMESTAMP.to_owned(), timestamp.to_string()));
    params.push((AUTH_VERSION.to_owned(), AUTH_VERSION_VALUE.to_owned()));
    params.push((BODY_MD5.to_owned(), body_md5(body)));

    sort_params(&mut params);

    let canonical_query = build_canonical_query_string(&params);
    let signing_input = build_signing_input(method, path, &canonical_query);

    debug!(signing_input, "Built REST signing input");

    let signature = sign(credentials.secret().expose(), signing_input.as_bytes());
    params.insert(0, (AUTH_SIGNATURE.to_owned(), signature));
    params
}

/// Verify the signature of a received REST parameter list.
///
/// This is the server-side counterpart of [`build_auth_params`]: the
/// `auth_signature` entry is stripped, the canonical signing input is
/// re-derived from the remaining parameters (re-sorted, so the incoming
/// order does not matter), and the recomputed signature is compared in
/// constant time.
///
/// # Errors
///
/// Returns [`AuthError::MissingAuthParam`] if the list has no
/// `auth_signature` entry, or [`AuthError::SignatureDoesNotMatch`] if the
/// recomputed signature differs.
pub fn verify_auth_params(
    credentials: &Credentials,
    method: &str,
    path: &str,
    params: &[(String, String)],
) -> Result<(), AuthError> {
    let provided_signature = params
        .iter()
        .find(|(key, _)| key == AUTH_SIGNATURE)
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| AuthError::MissingAuthParam(AUTH_SIGNATURE.to_owned()))?;

    let mut signed_params: Vec<(String, String)> = params
        .iter()
        .filter(|(key, _)| key != AUTH_SIGNATURE)
        .cloned()
        .collect();
    sort_params(&mut signed_params);

    let canonical_query = build_canonical_query_string(&signed_params);
    let signing_input = build_signing_input(method, path, &canonical_query);

    debug!(signing_input, "Rebuilt REST signing input for verification");

    if verify(
        credentials.secret().expose(),
        signing_input.as_bytes(),
        provided_signature,
    ) {
        Ok(())
    } else {
        debug!(provided = %provided_signature, "REST signature mismatch");
        Err(AuthError::SignatureDoesNotMatch)
    }
}
