pub mod contact;
pub mod session;
