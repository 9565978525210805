mod envelope;
pub use self::envelope::{ApiResponse, STATUS_SUCCESS};
