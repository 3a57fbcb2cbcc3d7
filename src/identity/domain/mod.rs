//! Domain model for authenticated users.

mod credentials;
mod ids;
mod session;

pub use credentials::Credentials;
pub use ids::UserId;
pub use session::{Session, UserIdentity};
