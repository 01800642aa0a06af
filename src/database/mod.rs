pub mod db_utils;
#[cfg(test)]
pub mod memory;
pub mod models;
pub mod store;
