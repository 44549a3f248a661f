pub mod authenticated_user;
pub mod role;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use role::Role;
