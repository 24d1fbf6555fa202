use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // number_sets holds the single current record (fixed id, upserted in place)
        manager
            .create_table(
                Table::create()
                    .table(NumberSets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NumberSets::Id)
                            .small_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NumberSets::Numbers)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NumberSets::SubmittedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // number_set_history is append-only
        manager
            .create_table(
                Table::create()
                    .table(NumberSetHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NumberSetHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NumberSetHistory::Numbers)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NumberSetHistory::SubmittedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on submitted_at for newest-first history reads
        manager
            .create_index(
                Index::create()
                    .name("idx_number_set_history_submitted_at")
                    .table(NumberSetHistory::Table)
                    .col(NumberSetHistory::SubmittedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NumberSetHistory::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(NumberSets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum NumberSets {
    Table,
    Id,
    Numbers,
    SubmittedAt,
}

#[derive(Iden)]
enum NumberSetHistory {
    Table,
    Id,
    Numbers,
    SubmittedAt,
}
