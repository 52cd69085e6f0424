pub mod api_client;
pub mod token_store;

pub use api_client::{extract_message, ApiClient};
pub use token_store::{default_token_store, LocalStorageTokenStore, MemoryTokenStore, TokenStore};
