//! SeaORM adapter for the frames table.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::frames;

/// Rows for `game_id` ordered by frame number.
pub async fn find_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<frames::Model>, sea_orm::DbErr> {
    frames::Entity::find()
        .filter(frames::Column::GameId.eq(game_id))
        .order_by_asc(frames::Column::FrameNumber)
        .all(conn)
        .await
}

/// Insert the empty slots 1..=`count` for a new game.
pub async fn create_empty_frames<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    count: u8,
) -> Result<(), sea_orm::DbErr> {
    let rows = (1..=i16::from(count)).map(|frame_number| frames::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        frame_number: Set(frame_number),
        first_roll: Set(None),
        second_roll: Set(None),
        third_roll: Set(None),
    });

    frames::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}

/// Overwrite the three roll columns of one frame.
pub async fn update_rolls<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    frame_number: i16,
    rolls: [Option<i16>; 3],
) -> Result<(), sea_orm::DbErr> {
    let [first, second, third] = rolls;

    let result = frames::Entity::update_many()
        .col_expr(frames::Column::FirstRoll, Expr::val(first).into())
        .col_expr(frames::Column::SecondRoll, Expr::val(second).into())
        .col_expr(frames::Column::ThirdRoll, Expr::val(third).into())
        .filter(frames::Column::GameId.eq(game_id))
        .filter(frames::Column::FrameNumber.eq(frame_number))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "frame {frame_number} of game {game_id}"
        )));
    }
    Ok(())
}
