//! Pluggable user data encoding for presence channels.
//!
//! Presence channel signing inputs embed the encoded user data verbatim
//! (see [`crate::channel`]), so the encoder is a strategy seam rather than
//! a hard-coded serializer: general-purpose JSON encoders do not guarantee
//! a stable field order across implementations or versions, and any
//! non-determinism in the encoded bytes directly breaks signature
//! reproducibility. Callers needing byte-exact output across environments
//! (test vectors, cross-language verification) supply their own encoder
//! with a fixed field order.

use serde::Serialize;

use crate::error::AuthError;

/// Strategy for encoding presence channel user data into signing-input bytes.
///
/// Implementations must be deterministic: for a fixed `user_data` value the
/// returned bytes must be identical on every call, since they are part of
/// the signing input and the verifying server re-derives the signature from
/// the exact bytes the client signed.
pub trait UserDataEncoder {
    /// Encode `user_data` into the exact bytes included in the signing input.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserDataEncoding`] if the data cannot be
    /// serialized.
    fn encode<T: Serialize>(&self, user_data: &T) -> Result<Vec<u8>, AuthError>;
}

/// The default encoder, backed by `serde_json`.
///
/// Derived `Serialize` implementations emit struct fields in declaration
/// order, which is stable for a fixed type definition. Map-typed user data
/// carries no such guarantee and should go through a custom encoder when
/// byte-exact reproducibility matters.
///
/// # Examples
///
/// ```
/// use pushstack_auth::encoder::{JsonEncoder, UserDataEncoder};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct UserData {
///     user_id: String,
/// }
///
/// let data = UserData { user_id: "10".to_owned() };
/// let bytes = JsonEncoder.encode(&data).unwrap();
/// assert_eq!(bytes, br#"{"user_id":"10"}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl UserDataEncoder for JsonEncoder {
    fn encode<T: Serialize>(&self, user_data: &T) -> Result<Vec<u8>, AuthError> {
        Ok(serde_json::to_vec(user_data)?)
    }
}
