//! Canonical signing string construction for REST requests.
//!
//! A REST signing input is built from loosely-ordered request data and must
//! come out byte-identical on both the signing client and the verifying
//! server:
//!
//! ```text
//! METHOD\n
//! PATH\n
//! CANONICAL_QUERY_STRING
//! ```
//!
//! where the canonical query string is the parameter set sorted by key in
//! byte-wise lexicographic order and rendered as `&`-joined `key=value`
//! pairs. No percent-encoding is applied at this layer: only the raw bytes
//! are signed, and the verifying server percent-decodes before re-deriving
//! the same string. The sort order and delimiters here are part of the wire
//! contract; any divergence breaks interoperability silently.

use std::cmp::Ordering;

/// Sort a parameter list by key in byte-wise lexicographic order.
///
/// The comparator is deliberately explicit rather than relying on a default
/// string collation: the verifying server re-derives the same ordering
/// independently, so the order is a wire-contract obligation, not a library
/// detail. The sort is stable, and keys are expected to be unique (duplicate
/// keys are caller error and yield a deterministic but unverifiable
/// signature).
///
/// # Examples
///
/// ```
/// use pushstack_auth::canonical::sort_params;
///
/// let mut params = vec![
///     ("name".to_owned(), "joe".to_owned()),
///     ("auth_key".to_owned(), "278d425bdf160c739803".to_owned()),
/// ];
/// sort_params(&mut params);
/// assert_eq!(params[0].0, "auth_key");
/// ```
pub fn sort_params(params: &mut [(String, String)]) {
    params.sort_by(|a, b| compare_keys(&a.0, &b.0));
}

/// Render a parameter list as a canonical query string.
///
/// Parameters are joined as `key=value` pairs with `&`, in the order given.
/// Callers sort with [`sort_params`] first; this function does not reorder
/// so that the rendered string always reflects exactly what was signed.
///
/// # Examples
///
/// ```
/// use pushstack_auth::canonical::build_canonical_query_string;
///
/// let params = vec![
///     ("a".to_owned(), "1".to_owned()),
///     ("b".to_owned(), "2".to_owned()),
/// ];
/// assert_eq!(build_canonical_query_string(&params), "a=1&b=2");
/// ```
#[must_use]
pub fn build_canonical_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the full REST signing input from its three segments.
///
/// The method string is passed through untouched: the caller controls case
/// and no normalization is performed here, since the server signs whatever
/// case actually went over the wire.
///
/// # Examples
///
/// ```
/// use pushstack_auth::canonical::build_signing_input;
///
/// let input = build_signing_input("POST", "/apps/3/events", "auth_key=abc");
/// assert_eq!(input, "POST\n/apps/3/events\nauth_key=abc");
/// ```
#[must_use]
pub fn build_signing_input(method: &str, path: &str, canonical_query: &str) -> String {
    format!("{method}\n{path}\n{canonical_query}")
}

/// Byte-wise lexicographic key comparison.
fn compare_keys(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}
