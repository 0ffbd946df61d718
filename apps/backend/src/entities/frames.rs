use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One of the ten frame slots of a game. Rolls are NULL until thrown.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "frames")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(column_name = "frame_number", column_type = "SmallInteger")]
    pub frame_number: i16,
    #[sea_orm(column_name = "first_roll", column_type = "SmallInteger")]
    pub first_roll: Option<i16>,
    #[sea_orm(column_name = "second_roll", column_type = "SmallInteger")]
    pub second_roll: Option<i16>,
    #[sea_orm(column_name = "third_roll", column_type = "SmallInteger")]
    pub third_roll: Option<i16>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
