pub mod hash;
pub mod media;
