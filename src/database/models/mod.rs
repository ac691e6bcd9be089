pub mod admin;

pub use admin::{AdminRecord, AdminRow, ADMIN_COLUMNS};
