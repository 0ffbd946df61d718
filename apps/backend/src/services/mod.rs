pub mod game_locks;
pub mod games;
