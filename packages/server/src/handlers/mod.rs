pub mod catalog;
pub mod favorite;
pub mod status;
pub mod tryon;
