use crate::Error;

/// Something that can list the sub-breeds of a dog breed.
///
/// [`crate::Client`] is the implementation backed by the dog.ceo API.
/// Anything else implementing this trait (an in-memory table in tests, for
/// instance) can stand in for it.
pub trait BreedFetcher: Send + Sync {
    /// Returns the sub-breeds of `breed` in the order the source lists them.
    ///
    /// The list may be empty. An unknown breed and a failed lookup both
    /// return [`Error::BreedNotFound`].
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>, Error>;
}
