use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on `bakery_id`: a baked good may name a missing bakery.
        manager
            .create_table(
                Table::create()
                    .table(BakedGood::Table)
                    .if_not_exists()
                    .col(pk_auto(BakedGood::Id))
                    .col(string(BakedGood::Name))
                    .col(double(BakedGood::Price))
                    .col(integer(BakedGood::BakeryId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-baked_good-bakery_id")
                    .table(BakedGood::Table)
                    .col(BakedGood::BakeryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BakedGood::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BakedGood {
    Table,
    Id,
    Name,
    Price,
    BakeryId,
}
