pub mod api;
pub mod config;
pub mod db_error;
pub mod slug;
