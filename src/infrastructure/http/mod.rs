pub mod price_feed_client;

pub use price_feed_client::{LOCAL_FEED_URL, PriceFeedClient, PriceFeedConfig, REMOTE_FEED_URL};
