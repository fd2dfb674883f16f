use ::entity::{baked_good, bakery, prelude::*};
use sea_orm::*;

/// A validated baked good, ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i32,
}

pub struct Mutation;

impl Mutation {
    /// Renames the bakery when `name` is given, otherwise hands back the stored row.
    ///
    /// Returns `Ok(None)` if no bakery has this id.
    pub async fn update_bakery_name(
        db: &DbConn,
        id: i32,
        name: Option<String>,
    ) -> Result<Option<bakery::Model>, DbErr> {
        let Some(bakery) = Bakery::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        match name {
            Some(name) => {
                let mut bakery: bakery::ActiveModel = bakery.into();
                bakery.name = Set(name);
                bakery.update(db).await.map(Some)
            }
            None => Ok(Some(bakery)),
        }
    }

    /// The bakery is not looked up: an unknown `bakery_id` is stored as is.
    pub async fn create_baked_good(
        db: &DbConn,
        form_data: NewBakedGood,
    ) -> Result<baked_good::Model, DbErr> {
        baked_good::ActiveModel {
            name: Set(form_data.name),
            price: Set(form_data.price),
            bakery_id: Set(form_data.bakery_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// `rows_affected` is zero when no baked good has this id.
    pub async fn delete_baked_good(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        BakedGood::delete_by_id(id).exec(db).await
    }
}
