use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Status,
    TotalScore,
    CreatedAt,
    UpdatedAt,
    LockVersion,
}

#[derive(Iden)]
enum Frames {
    Table,
    Id,
    GameId,
    FrameNumber,
    FirstRoll,
    SecondRoll,
    ThirdRoll,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Games::Status)
                            .string_len(16)
                            .not_null()
                            .default("in_progress"),
                    )
                    .col(
                        ColumnDef::new(Games::TotalScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        // frames: one row per slot, rolls stay NULL until thrown
        manager
            .create_table(
                Table::create()
                    .table(Frames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Frames::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Frames::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Frames::FrameNumber).small_integer().not_null())
                    .col(ColumnDef::new(Frames::FirstRoll).small_integer().null())
                    .col(ColumnDef::new(Frames::SecondRoll).small_integer().null())
                    .col(ColumnDef::new(Frames::ThirdRoll).small_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_frames_game_id")
                            .from(Frames::Table, Frames::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_frames_game_frame_number")
                    .table(Frames::Table)
                    .col(Frames::GameId)
                    .col(Frames::FrameNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop index before table, children before parents
        manager
            .drop_index(
                Index::drop()
                    .name("ux_frames_game_frame_number")
                    .table(Frames::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Frames::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
