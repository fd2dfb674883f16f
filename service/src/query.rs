use ::entity::{baked_good, bakery, prelude::*};
use sea_orm::*;

pub struct Query;

impl Query {
    /// Every bakery, each paired with its baked goods.
    ///
    /// Bakeries without any baked goods are included with an empty list.
    pub async fn find_bakeries_with_baked_goods(
        db: &DbConn,
    ) -> Result<Vec<(bakery::Model, Vec<baked_good::Model>)>, DbErr> {
        Bakery::find()
            .find_with_related(BakedGood)
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_bakery_by_id(db: &DbConn, id: i32) -> Result<Option<bakery::Model>, DbErr> {
        Bakery::find_by_id(id).one(db).await
    }

    pub async fn find_bakery_with_baked_goods(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<(bakery::Model, Vec<baked_good::Model>)>, DbErr> {
        let Some(bakery) = Self::find_bakery_by_id(db, id).await? else {
            return Ok(None);
        };
        let baked_goods = Self::find_baked_goods_of_bakery(db, &bakery).await?;

        Ok(Some((bakery, baked_goods)))
    }

    pub async fn find_baked_goods_of_bakery(
        db: &DbConn,
        bakery: &bakery::Model,
    ) -> Result<Vec<baked_good::Model>, DbErr> {
        bakery
            .find_related(BakedGood)
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await
    }

    /// Most expensive first; equal prices fall back to id order.
    pub async fn find_baked_goods_by_price(db: &DbConn) -> Result<Vec<baked_good::Model>, DbErr> {
        Self::by_price().all(db).await
    }

    pub async fn find_most_expensive_baked_good(
        db: &DbConn,
    ) -> Result<Option<baked_good::Model>, DbErr> {
        Self::by_price().one(db).await
    }

    fn by_price() -> Select<BakedGood> {
        BakedGood::find()
            .order_by_desc(baked_good::Column::Price)
            .order_by_asc(baked_good::Column::Id)
    }
}
