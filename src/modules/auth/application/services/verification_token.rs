use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// How long an emailed verification link stays valid.
pub const VERIFICATION_TOKEN_TTL_HOURS: i64 = 24;

/// A freshly issued verification token. Only `hash` is ever persisted;
/// `raw` goes out by email.
#[derive(Debug, Clone)]
pub struct IssuedVerificationToken {
    pub raw: String,
    pub hash: String,
    pub expires_at: DateTime<Utc>,
}

impl IssuedVerificationToken {
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        let raw = hex::encode(bytes);

        Self {
            hash: hash_token(&raw),
            raw,
            expires_at: Utc::now() + Duration::hours(VERIFICATION_TOKEN_TTL_HOURS),
        }
    }
}

/// Hash a token using SHA-256 for storage
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
