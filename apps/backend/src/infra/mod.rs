//! Infrastructure: database connection, state construction, storage error mapping.

pub mod db;
pub mod db_errors;
pub mod state;
