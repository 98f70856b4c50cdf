/// Simplified error system - no over-engineering!
#[derive(Debug, Clone)]
pub enum AppError {
    /// Price feed fetch failed or the body did not parse.
    DataUnavailable(String),
    /// Decorative asset (pattern image) could not be loaded.
    AssetUnavailable(String),
    /// Clipboard image write was rejected by the platform.
    Clipboard(String),
    /// A required DOM element or browser API was missing.
    Dom(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DataUnavailable(msg) => write!(f, "Data Unavailable: {}", msg),
            AppError::AssetUnavailable(msg) => write!(f, "Asset Unavailable: {}", msg),
            AppError::Clipboard(msg) => write!(f, "Clipboard Error: {}", msg),
            AppError::Dom(msg) => write!(f, "DOM Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type FetchResult<T> = Result<T, AppError>;
pub type ShareResult<T> = Result<T, AppError>;
