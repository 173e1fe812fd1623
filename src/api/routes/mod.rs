//! API route declarations (e.g., /banks/*)

pub mod bank_routes;
