use anyhow::Context;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::Result;

pub const SESSION_COOKIE_NAME: &str = "atelier_session";

/// The session artifact handed back by the identity provider. The provider
/// itself is opaque to this application; we only carry what the layout and
/// the API boundary need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

pub fn encode_session(session: &UserSession) -> Result<String> {
    let json = serde_json::to_string(session).context("failed to serialize session")?;
    use base64::Engine;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

pub fn decode_session(encoded: &str) -> Result<UserSession> {
    use base64::Engine;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded)
        .context("failed to decode base64")?;
    let json = String::from_utf8(bytes).context("invalid UTF-8 in session")?;
    serde_json::from_str(&json).context("failed to parse session JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_cookie_encoding() {
        let session = UserSession {
            user_id: "f3b0e6c0".into(),
            username: "admin".into(),
            display_name: "Store Operator".into(),
            access_token: "opaque-token".into(),
        };
        let encoded = encode_session(&session).unwrap();
        let decoded = decode_session(&encoded).unwrap();
        assert_eq!(decoded.username, session.username);
        assert_eq!(decoded.display_name, session.display_name);
    }

    #[test]
    fn garbage_cookie_is_an_error() {
        assert!(decode_session("not base64!!").is_err());
    }
}
