pub mod error;
pub mod session;
pub mod session_file;
pub mod session_store;
pub mod signup_request;

pub use error::{AuthError, Result};
pub use session::Session;
pub use session_store::SessionStore;
pub use signup_request::SignupRequest;

#[cfg(test)]
mod tests;
