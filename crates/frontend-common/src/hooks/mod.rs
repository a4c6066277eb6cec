//! Custom hooks for the application

mod use_route_guard;
mod use_user_role;

pub use use_route_guard::use_route_guard;
pub use use_user_role::use_user_role;
