//! Game repository: rebuilds `GameState` from stored frames and writes rolls back.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::error;

use crate::adapters::{frames_sea, games_sea};
use crate::domain::{Frame, GameState, GameStatus, FRAMES_PER_GAME};
use crate::entities::{frames, games};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// A persisted game: the engine state plus row metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub state: GameState,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
    pub lock_version: i32,
}

impl Game {
    fn from_rows(row: games::Model, frame_rows: &[frames::Model]) -> Result<Self, DomainError> {
        let stored = stored_rolls(row.id, frame_rows)?;
        let state = GameState::replay(&stored).map_err(|rejection| {
            error!(game_id = row.id, %rejection, "Stored rolls violate the rules");
            corruption(row.id, format!("stored rolls are not playable: {rejection}"))
        })?;

        if db_status(state.status()) != row.status {
            error!(game_id = row.id, stored = ?row.status, derived = ?state.status(), "Stored status disagrees with rolls");
            return Err(corruption(row.id, "stored status disagrees with rolls"));
        }

        Ok(Self {
            id: row.id,
            state,
            created_at: row.created_at,
            updated_at: row.updated_at,
            lock_version: row.lock_version,
        })
    }
}

fn corruption(game_id: i64, detail: impl std::fmt::Display) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("Game {game_id}: {detail}"),
    )
}

/// Pins per frame in slot order, as `GameState::replay` expects.
fn stored_rolls(game_id: i64, rows: &[frames::Model]) -> Result<Vec<Vec<u8>>, DomainError> {
    if rows.len() != usize::from(FRAMES_PER_GAME) {
        return Err(corruption(
            game_id,
            format!("expected {FRAMES_PER_GAME} frames, found {}", rows.len()),
        ));
    }

    rows.iter()
        .zip(1i16..)
        .map(|(row, expected)| -> Result<Vec<u8>, DomainError> {
            if row.frame_number != expected {
                return Err(corruption(
                    game_id,
                    format!("frame {expected} missing (found {})", row.frame_number),
                ));
            }
            let columns = [row.first_roll, row.second_roll, row.third_roll];
            // A gap (e.g. third roll without a second) is corrupt.
            let thrown = columns.iter().take_while(|c| c.is_some()).count();
            if columns[thrown..].iter().any(Option::is_some) {
                return Err(corruption(
                    game_id,
                    format!("frame {expected} has a gap between rolls"),
                ));
            }
            columns
                .iter()
                .flatten()
                .map(|&pins| {
                    u8::try_from(pins).map_err(|_| {
                        corruption(game_id, format!("frame {expected} has pin count {pins}"))
                    })
                })
                .collect()
        })
        .collect()
}

fn db_status(status: GameStatus) -> games::GameStatus {
    match status {
        GameStatus::InProgress => games::GameStatus::InProgress,
        GameStatus::Complete => games::GameStatus::Complete,
    }
}

fn roll_columns(frame: &Frame) -> [Option<i16>; 3] {
    let mut columns = [None; 3];
    for (slot, roll) in columns.iter_mut().zip(frame.rolls()) {
        *slot = Some(i16::from(roll.pins()));
    }
    columns
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let Some(row) = games_sea::find_by_id(conn, game_id).await? else {
        return Ok(None);
    };
    let frame_rows = frames_sea::find_for_game(conn, game_id).await?;
    Game::from_rows(row, &frame_rows).map(Some)
}

/// Load a game or fail with `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| DomainError::game_not_found(game_id))
}

/// Insert a new game and its ten empty frames.
pub async fn create_game(txn: &DatabaseTransaction) -> Result<Game, DomainError> {
    let row = games_sea::create_game(txn).await?;
    frames_sea::create_empty_frames(txn, row.id, FRAMES_PER_GAME).await?;

    Ok(Game {
        id: row.id,
        state: GameState::new(),
        created_at: row.created_at,
        updated_at: row.updated_at,
        lock_version: row.lock_version,
    })
}

/// Persist frame `frame_number` of `game` plus the game's status and total.
///
/// `game.lock_version` must be the version the state was loaded at; the
/// returned game carries the bumped version.
pub async fn save_frame(
    txn: &DatabaseTransaction,
    mut game: Game,
    frame_number: u8,
) -> Result<Game, DomainError> {
    let frame = game
        .state
        .frame(frame_number)
        .ok_or_else(|| DomainError::validation_other(format!("no frame {frame_number}")))?;

    frames_sea::update_rolls(txn, game.id, i16::from(frame_number), roll_columns(frame)).await?;

    let update = games_sea::GameProgressUpdate::new(game.id, game.lock_version)
        .with_status(db_status(game.state.status()))
        .with_total_score(i32::from(game.state.total_score()));
    let row = games_sea::update_progress(txn, update).await?;

    game.updated_at = row.updated_at;
    game.lock_version = row.lock_version;
    Ok(game)
}
