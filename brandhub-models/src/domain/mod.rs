pub mod brand;
pub mod common;
pub mod prelude;
pub mod session;
pub mod user;
