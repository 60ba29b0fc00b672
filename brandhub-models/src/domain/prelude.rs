pub use super::brand::*;
pub use super::common::*;
pub use super::session::*;
pub use super::user::*;
