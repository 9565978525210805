//! Client for the dog.ceo breed API.
//!
//! [`Client`] performs a blocking lookup of a breed's sub-breeds and is the
//! production implementation of [`BreedFetcher`].

mod client;
mod errors;
mod fetcher;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::fetcher::BreedFetcher;
