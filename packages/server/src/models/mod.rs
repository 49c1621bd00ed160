pub mod catalog;
pub mod favorite;
pub mod shared;
pub mod status;
pub mod tryon;
