pub mod bank;
pub mod db;
