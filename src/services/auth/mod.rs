pub mod api_key;

pub use api_key::{API_KEY_SCHEME, ApiKey, ApiKeyError, extract_api_key};
