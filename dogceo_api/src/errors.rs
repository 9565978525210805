//! Error types for the API client.

/// The one failure a sub-breed lookup can report.
///
/// Network errors, unreadable bodies, non-2xx statuses, malformed JSON and
/// an API status other than `"success"` all surface as this variant. The
/// underlying cause is logged, not returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The breed is unknown or its sub-breeds could not be fetched.
    #[error("{0}")]
    BreedNotFound(String),
}

impl Error {
    pub(crate) fn breed_not_found(breed: &str) -> Self {
        Error::BreedNotFound(format!("Breed not found: {}", breed))
    }
}
