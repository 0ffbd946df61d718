//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps
//! them to `DomainError`.

pub mod frames_sea;
pub mod games_sea;
