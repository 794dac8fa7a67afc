/**
 * Firebase ID Token Verification
 *
 * Firebase ID tokens are RS256 JWTs signed with keys Google publishes as a
 * JWK set. Verification:
 *
 * 1. Read `kid` from the token header
 * 2. Look the key up in the cached JWK set. The set is refetched when it
 *    expires (`Cache-Control: max-age`, else the configured TTL) or when an
 *    unknown `kid` shows up, at most once per `min_refresh_interval`
 * 3. Validate signature, `exp`, `aud == project_id` and
 *    `iss == https://securetoken.google.com/<project_id>`
 * 4. Require a non-empty `sub`, which becomes the principal's uid
 */

use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use reqwest::header::{HeaderMap, CACHE_CONTROL};
use tokio::sync::RwLock;

use crate::backend::auth::identity::{Claims, IdentityError, IdentityVerifier};
use crate::shared::Principal;

/// Google's published signing keys for Firebase ID tokens
pub const GOOGLE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// How long a downloaded key set is trusted when the response carries no
/// `max-age`
pub const DEFAULT_KEY_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Minimum spacing between refetches triggered by unknown key ids
pub const DEFAULT_MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
    expires_at: Instant,
}

impl CachedKeys {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// `max-age` directive of a `Cache-Control` header
fn max_age(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(CACHE_CONTROL)?
        .to_str()
        .ok()?
        .split(',')
        .filter_map(|directive| directive.trim().strip_prefix("max-age="))
        .find_map(|secs| secs.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Verifier for Firebase ID tokens of a single project
pub struct FirebaseVerifier {
    project_id: String,
    jwks_url: String,
    http: reqwest::Client,
    cache_ttl: Duration,
    min_refresh_interval: Duration,
    cache: RwLock<Option<CachedKeys>>,
}

impl FirebaseVerifier {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            jwks_url: GOOGLE_JWKS_URL.to_string(),
            http: reqwest::Client::new(),
            cache_ttl: DEFAULT_KEY_CACHE_TTL,
            min_refresh_interval: DEFAULT_MIN_REFRESH_INTERVAL,
            cache: RwLock::new(None),
        }
    }

    /// Fetch keys from another location (tests point this at a mock server)
    pub fn with_jwks_url(mut self, jwks_url: impl Into<String>) -> Self {
        self.jwks_url = jwks_url.into();
        self
    }

    /// Fallback lifetime for key sets served without `max-age`
    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    pub fn with_min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }

    /// Look a key up in the cache; `None` when the cache is empty or stale
    async fn cached_key(&self, kid: &str) -> Result<Option<DecodingKey>, IdentityError> {
        let cache = self.cache.read().await;
        let Some(cached) = cache.as_ref() else {
            return Ok(None);
        };
        if !cached.is_fresh(Instant::now()) {
            return Ok(None);
        }
        match cached.keys.find(kid) {
            Some(jwk) => Ok(Some(DecodingKey::from_jwk(jwk)?)),
            None => Ok(None),
        }
    }

    /// Whether a cache miss may go to the network
    async fn may_refresh(&self) -> bool {
        match self.cache.read().await.as_ref() {
            Some(cached) => {
                !cached.is_fresh(Instant::now())
                    || cached.fetched_at.elapsed() >= self.min_refresh_interval
            }
            None => true,
        }
    }

    /// Download the key set, cache it and return the key for `kid`
    async fn refresh_keys(&self, kid: &str) -> Result<Option<DecodingKey>, IdentityError> {
        tracing::debug!("Fetching identity provider keys from {}", self.jwks_url);

        let response = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| IdentityError::KeyFetch(e.to_string()))?;

        let ttl = max_age(response.headers()).unwrap_or(self.cache_ttl);
        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| IdentityError::KeyFetch(e.to_string()))?;

        tracing::info!(
            count = keys.keys.len(),
            ttl_secs = ttl.as_secs(),
            "Loaded identity provider keys"
        );
        let key = keys.find(kid).map(DecodingKey::from_jwk).transpose()?;
        let fetched_at = Instant::now();
        *self.cache.write().await = Some(CachedKeys {
            keys,
            fetched_at,
            expires_at: fetched_at + ttl,
        });
        Ok(key)
    }

    async fn key_for(&self, kid: &str) -> Result<DecodingKey, IdentityError> {
        if let Some(key) = self.cached_key(kid).await? {
            return Ok(key);
        }

        if !self.may_refresh().await {
            tracing::debug!(kid, "Unknown key id, keys refreshed too recently");
            return Err(IdentityError::UnknownKey(kid.to_string()));
        }

        // Stale cache or a rotated key
        self.refresh_keys(kid)
            .await?
            .ok_or_else(|| IdentityError::UnknownKey(kid.to_string()))
    }

    pub async fn verify_id_token(&self, token: &str) -> Result<Principal, IdentityError> {
        let header = decode_header(token)?;
        let kid = header
            .kid
            .ok_or_else(|| IdentityError::UnknownKey("<missing kid>".to_string()))?;
        let key = self.key_for(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.project_id.as_str()]);
        validation.set_issuer(&[self.issuer()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);

        let token_data = decode::<Claims>(token, &key, &validation)?;
        Principal::try_from(token_data.claims)
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, IdentityError> {
        self.verify_id_token(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_includes_project() {
        let verifier = FirebaseVerifier::new("demo-project");
        assert_eq!(verifier.issuer(), "https://securetoken.google.com/demo-project");
        assert_eq!(verifier.project_id(), "demo-project");
    }

    fn headers(cache_control: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, cache_control.parse().unwrap());
        headers
    }

    #[test]
    fn test_max_age_from_cache_control() {
        assert_eq!(
            max_age(&headers("public, max-age=19800, must-revalidate, no-transform")),
            Some(Duration::from_secs(19800))
        );
        assert_eq!(max_age(&headers("max-age=0")), Some(Duration::ZERO));
        assert_eq!(max_age(&headers("no-cache")), None);
        assert_eq!(max_age(&headers("max-age=soon")), None);
        assert_eq!(max_age(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_malformed_token_rejected_before_fetch() {
        // Unreachable key URL: the header check must fail first
        let verifier = FirebaseVerifier::new("demo-project").with_jwks_url("http://127.0.0.1:9/keys");
        let result = verifier.verify_id_token("not-a-jwt").await;
        assert!(matches!(result, Err(IdentityError::InvalidToken(_))));
    }
}
