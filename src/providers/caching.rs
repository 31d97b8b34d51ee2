use crate::core::cache::KeyValueCollection;
use crate::core::price::{DateRange, PriceProvider};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Caches provider payloads in a key/value collection. Only payloads are
/// cached; failures and "no data" answers always reach the inner provider.
#[derive(Clone)]
pub struct CachingPriceProvider<T: PriceProvider> {
    inner: T,
    cache: Arc<dyn KeyValueCollection>,
    ttl: Option<Duration>,
}

impl<T: PriceProvider> CachingPriceProvider<T> {
    pub fn new(inner: T, cache: Arc<dyn KeyValueCollection>, ttl: Option<Duration>) -> Self {
        Self { inner, cache, ttl }
    }
}

fn history_key(symbol: &str, range: Option<DateRange>) -> String {
    let window = range.map_or_else(|| "default".to_string(), |r| r.to_string());
    format!("history:{}:{}", symbol.to_uppercase(), window)
}

#[async_trait]
impl<T: PriceProvider> PriceProvider for CachingPriceProvider<T> {
    async fn fetch_history(
        &self,
        symbol: &str,
        range: Option<DateRange>,
    ) -> Result<Option<Value>> {
        let key = history_key(symbol, range);

        if let Some(bytes) = self.cache.get(key.as_bytes()).await {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(payload) => {
                    debug!("Cache hit for {}", key);
                    return Ok(Some(payload));
                }
                Err(e) => debug!("Discarding unreadable cache entry {}: {}", key, e),
            }
        }

        debug!("Cache miss for {}", key);
        let result = self.inner.fetch_history(symbol, range).await?;
        if let Some(payload) = &result {
            let bytes = serde_json::to_vec(payload)?;
            self.cache.put(key.as_bytes(), &bytes, self.ttl).await;
        }
        Ok(result)
    }
}
