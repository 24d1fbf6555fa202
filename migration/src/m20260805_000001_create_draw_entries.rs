use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create draw_entries table: one row per filled (day, slot)
        manager
            .create_table(
                Table::create()
                    .table(DrawEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DrawEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DrawEntries::DrawDate).date().not_null())
                    .col(
                        ColumnDef::new(DrawEntries::DateLabel)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DrawEntries::Slot)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DrawEntries::Value)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DrawEntries::CreatedAt)
                            .timestamp()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index on (draw_date, slot): a slot can only ever be filled once
        manager
            .create_index(
                Index::create()
                    .name("idx_draw_entries_date_slot")
                    .table(DrawEntries::Table)
                    .col(DrawEntries::DrawDate)
                    .col(DrawEntries::Slot)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create index on draw_date for day lookups and ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_draw_entries_draw_date")
                    .table(DrawEntries::Table)
                    .col(DrawEntries::DrawDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DrawEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DrawEntries {
    Table,
    Id,
    DrawDate,
    DateLabel,
    Slot,
    Value,
    CreatedAt,
}
