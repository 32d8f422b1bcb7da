//! Fetches and caches the identity provider's JWKS document.
//!
//! Only RSA keys are usable for the RS256-only validation this service
//! performs; keys of any other type (or RSA keys missing their modulus or
//! exponent) are skipped rather than failing the whole key set.

use jsonwebtoken::DecodingKey;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    #[serde(default)]
    n: Option<String>,
    #[serde(default)]
    e: Option<String>,
}

#[derive(Default)]
struct KeyCache {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Option<Instant>,
}

impl KeyCache {
    fn fresh_key(&self, kid: &str, ttl: Duration) -> Option<DecodingKey> {
        let fetched_at = self.fetched_at?;
        if fetched_at.elapsed() >= ttl {
            return None;
        }
        self.keys.get(kid).cloned()
    }
}

pub struct JwksClient {
    jwks_url: String,
    http: reqwest::Client,
    cache: RwLock<KeyCache>,
    cache_ttl: Duration,
}

impl JwksClient {
    pub fn new(jwks_url: &str, cache_ttl: Duration) -> Self {
        Self {
            jwks_url: jwks_url.to_string(),
            http: reqwest::Client::new(),
            cache: RwLock::new(KeyCache::default()),
            cache_ttl,
        }
    }

    /// Decoding key for the given key id, refreshing the cached key set
    /// when it is missing or older than the configured TTL.
    pub async fn get_key(&self, kid: &str) -> Result<DecodingKey, JwksError> {
        if let Some(key) = self.cache.read().await.fresh_key(kid, self.cache_ttl) {
            return Ok(key);
        }

        self.refresh().await?;

        self.cache
            .read()
            .await
            .keys
            .get(kid)
            .cloned()
            .ok_or_else(|| JwksError::UnknownKeyId(kid.to_string()))
    }

    async fn refresh(&self) -> Result<(), JwksError> {
        let response = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| JwksError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JwksError::Fetch(format!(
                "JWKS endpoint returned HTTP {}",
                response.status()
            )));
        }

        let set: JwkSet = response
            .json()
            .await
            .map_err(|e| JwksError::Decode(e.to_string()))?;

        let keys = decoding_keys_from(set);
        if keys.is_empty() {
            tracing::warn!("JWKS document from {} contained no usable RSA keys", self.jwks_url);
        }

        let mut cache = self.cache.write().await;
        cache.keys = keys;
        cache.fetched_at = Some(Instant::now());

        Ok(())
    }
}

fn decoding_keys_from(set: JwkSet) -> HashMap<String, DecodingKey> {
    let mut keys = HashMap::new();

    for jwk in set.keys {
        if jwk.kty != "RSA" {
            tracing::debug!("Skipping JWKS key {} with unsupported kty {}", jwk.kid, jwk.kty);
            continue;
        }
        let (Some(n), Some(e)) = (&jwk.n, &jwk.e) else {
            tracing::warn!("Skipping RSA JWKS key {} without modulus/exponent", jwk.kid);
            continue;
        };
        match DecodingKey::from_rsa_components(n, e) {
            Ok(key) => {
                keys.insert(jwk.kid, key);
            }
            Err(e) => {
                tracing::warn!("Skipping malformed JWKS key {}: {}", jwk.kid, e);
            }
        }
    }

    keys
}

#[derive(Debug, thiserror::Error)]
pub enum JwksError {
    #[error("Failed to fetch JWKS: {0}")]
    Fetch(String),

    #[error("Failed to decode JWKS: {0}")]
    Decode(String),

    #[error("No key with id {0} in JWKS")]
    UnknownKeyId(String),
}
