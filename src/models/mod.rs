pub mod directive;
pub mod envelope;
pub mod error;

pub use directive::{Scope, bearer_token, find_scope};
pub use envelope::{ErrorEnvelope, ErrorType};
pub use error::RelayError;
