use crate::domain::errors::{AppError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger, get_time_provider};
use crate::domain::pricing::PriceRecord;
use gloo_net::http::Request;

/// Published data branch carrying the scraped price snapshot.
pub const REMOTE_FEED_URL: &str =
    "https://raw.githubusercontent.com/matrixrex/Mahar-Calculator/data/price.json";

/// Static file served next to the page for standalone deployments.
pub const LOCAL_FEED_URL: &str = "./price.json";

/// Injectable price source. The remote data branch sits behind a CDN, so
/// it gets a cache-defeating query parameter; the local file does not.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFeedConfig {
    pub base_url: String,
    pub cache_bust: bool,
}

impl PriceFeedConfig {
    pub fn remote() -> Self {
        Self { base_url: REMOTE_FEED_URL.to_string(), cache_bust: true }
    }

    pub fn local() -> Self {
        Self { base_url: LOCAL_FEED_URL.to_string(), cache_bust: false }
    }

    /// Final request URL for a fetch issued at `now_ms`.
    pub fn request_url(&self, now_ms: u64) -> String {
        if self.cache_bust {
            format!("{}?t={}", self.base_url, now_ms)
        } else {
            self.base_url.clone()
        }
    }
}

/// Fetches one `PriceRecord` per invocation. No retry: a failed attempt
/// is terminal and the caller renders the error state.
pub struct PriceFeedClient {
    config: PriceFeedConfig,
}

impl PriceFeedClient {
    pub fn new(config: PriceFeedConfig) -> Self {
        Self { config }
    }

    pub async fn fetch_quote(&self) -> FetchResult<PriceRecord> {
        let url = self.config.request_url(get_time_provider().current_timestamp());

        get_logger().info(
            LogComponent::Infrastructure("PriceFeed"),
            &format!("📈 Fetching silver price from: {url}"),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::DataUnavailable(format!("request failed: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::DataUnavailable(format!("HTTP error: {}", response.status())));
        }

        let record: PriceRecord = response
            .json()
            .await
            .map_err(|e| AppError::DataUnavailable(format!("invalid price body: {e:?}")))?;

        get_logger().info(
            LogComponent::Infrastructure("PriceFeed"),
            &format!("✅ Price snapshot loaded: {} BDT/oz at t={}", record.price, record.timestamp),
        );

        Ok(record)
    }
}
