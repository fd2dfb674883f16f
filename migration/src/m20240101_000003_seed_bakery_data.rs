use entity::{baked_good, bakery};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, EntityTrait, Set};

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_DATA: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful Donuts",
        &[("Chocolate Dipped Donut", 2.75), ("Apple Fritter", 3.25)],
    ),
    (
        "Incredible Crullers",
        &[
            ("Glazed Cruller", 2.50),
            ("Maple Bacon Cruller", 4.25),
            ("Strawberry Cruller", 2.75),
        ],
    ),
    ("Sunrise Bakehouse", &[]),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (bakery_name, baked_goods) in SEED_DATA {
            let bakery = bakery::ActiveModel {
                name: Set((*bakery_name).to_owned()),
                ..Default::default()
            }
            .insert(db)
            .await?;

            for (name, price) in baked_goods.iter() {
                baked_good::ActiveModel {
                    name: Set((*name).to_owned()),
                    price: Set(*price),
                    bakery_id: Set(bakery.id),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        baked_good::Entity::delete_many().exec(db).await?;
        bakery::Entity::delete_many().exec(db).await?;

        Ok(())
    }
}
