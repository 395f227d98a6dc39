pub mod base64;
pub mod http;

// Re-export common utilities
pub use self::base64::decode_subscription;
pub use http::{FetchOptions, HttpFetcher, SubscriptionFetcher};
