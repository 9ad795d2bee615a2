pub mod db;
pub mod errors;
pub mod menu_item;
