//! Repository functions: load and persist domain state through the adapters.

pub mod games;
