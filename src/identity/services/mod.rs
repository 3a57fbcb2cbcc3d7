//! Application services for session lifecycle.

mod session;

pub use session::SessionService;
