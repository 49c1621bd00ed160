pub mod saree_item;
pub mod status_check;
pub mod tryon_result;
