//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::GameProgressUpdate;

/// Apply an optimistic update guarded by `lock_version`, then refetch.
///
/// Bumps `lock_version` and `updated_at`. Zero affected rows means either the
/// game is gone (`RecordNotFound`) or another writer got there first
/// (`Custom("OPTIMISTIC_LOCK:{..}")`).
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    current_lock_version: i32,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::LockVersion.eq(current_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match games::Entity::find_by_id(id).one(conn).await? {
            Some(game) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                current_lock_version, game.lock_version
            ))),
            None => Err(game_not_found(id)),
        };
    }

    require_game(conn, id).await
}

fn game_not_found(id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or fail with a structured `GAME_NOT_FOUND:<id>` error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

/// Insert a fresh in-progress game with zero score.
pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        status: Set(games::GameStatus::InProgress),
        total_score: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        lock_version: Set(1),
    };

    game_active.insert(conn).await
}

/// Record the game's status and total after a roll.
pub async fn update_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameProgressUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    optimistic_update_then_fetch(conn, dto.id, dto.expected_version, |update| {
        update
            .col_expr(games::Column::Status, Expr::val(dto.status.to_value()).into())
            .col_expr(games::Column::TotalScore, Expr::val(dto.total_score).into())
    })
    .await
}
