//! Channel subscription token authentication.
//!
//! End-users joining a private or presence channel over a realtime
//! connection present a one-time signed token. The signing inputs are
//! colon-delimited:
//!
//! ```text
//! private:   SOCKET_ID + ":" + CHANNEL_NAME
//! presence:  SOCKET_ID + ":" + CHANNEL_NAME + ":" + ENCODED_USER_DATA
//! ```
//!
//! and the token handed to the client is `APP_KEY + ":" + HEX_SIGNATURE`.
//! Channel names are opaque byte strings here; no semantic interpretation
//! is applied.

use serde::Serialize;
use tracing::debug;

use crate::credentials::Credentials;
use crate::encoder::{JsonEncoder, UserDataEncoder};
use crate::error::AuthError;
use crate::signature::sign;

/// Authorize a private channel subscription.
///
/// Signs `socketID:channelName` and returns the `appKey:signature` token.
///
/// # Examples
///
/// ```
/// use pushstack_auth::{Credentials, authenticate_private_channel};
///
/// let credentials = Credentials::new("278d425bdf160c739803", "7ad3773142a6692b25b8");
/// let token = authenticate_private_channel(&credentials, "1234.1234", "private-foobar");
/// assert_eq!(
///     token,
///     "278d425bdf160c739803:58df8b0c36d6982b82c3ecf6b4662e34fe8c25bba48f5369f135bf843651c3a4"
/// );
/// ```
#[must_use]
pub fn authenticate_private_channel(
    credentials: &Credentials,
    socket_id: &str,
    channel_name: &str,
) -> String {
    let signing_input = format!("{socket_id}:{channel_name}");

    debug!(socket_id, channel_name, "Signing private channel subscription");

    let signature = sign(credentials.secret().expose(), signing_input.as_bytes());
    format!("{}:{signature}", credentials.key())
}

/// Authorize a presence channel subscription using the default JSON encoder.
///
/// See [`authenticate_presence_channel_with`] for the encoding contract;
/// [`JsonEncoder`] is suitable whenever the user data type has a stable
/// derived `Serialize` field order.
///
/// # Errors
///
/// Returns [`AuthError::UserDataEncoding`] if `user_data` cannot be
/// serialized.
pub fn authenticate_presence_channel<T: Serialize>(
    credentials: &Credentials,
    socket_id: &str,
    channel_name: &str,
    user_data: &T,
) -> Result<String, AuthError> {
    authenticate_presence_channel_with(
        credentials,
        socket_id,
        channel_name,
        user_data,
        &JsonEncoder,
    )
}

/// Authorize a presence channel subscription with a caller-supplied encoder.
///
/// The encoded user data bytes become part of the signing input, so the
/// encoder must be deterministic (see [`UserDataEncoder`]). The signing
/// input is assembled as raw bytes; encoder output need not be valid UTF-8.
///
/// # Errors
///
/// Returns an [`AuthError`] if the encoder fails.
pub fn authenticate_presence_channel_with<T, E>(
    credentials: &Credentials,
    socket_id: &str,
    channel_name: &str,
    user_data: &T,
    encoder: &E,
) -> Result<String, AuthError>
where
    T: Serialize,
    E: UserDataEncoder,
{
    let encoded = encoder.encode(user_data)?;

    let mut signing_input =
        Vec::with_capacity(socket_id.len() + channel_name.len() + encoded.len() + 2);
    signing_input.extend_from_slice(socket_id.as_bytes());
    signing_input.push(b':');
    signing_input.extend_from_slice(channel_name.as_bytes());
    signing_input.push(b':');
    signing_input.extend_from_slice(&encoded);

    debug!(
        socket_id,
        channel_name,
        user_data_len = encoded.len(),
        "Signing presence channel subscription"
    );

    let signature = sign(credentials.secret().expose(), &signing_input);
    Ok(format!("{}:{signature}", credentials.key()))
}
