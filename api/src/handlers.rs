use axum::{extract::State, http::StatusCode, response::Html};
use bakery_service::{Mutation as MutationCore, Query as QueryCore};

use crate::AppState;
use crate::error::{ApiError, BAKED_GOOD_NOT_FOUND, BAKERY_NOT_FOUND, NO_BAKED_GOODS};
use crate::form::{BakeryNameForm, FormFields, IdPath, RawBakedGoodForm};
use crate::view::{BakedGoodView, BakeryView, Message, PrettyJson};

pub const BANNER: &str = "<h1>Bakery GET-POST-PATCH-DELETE API</h1>";

pub async fn home() -> Html<&'static str> {
    Html(BANNER)
}

pub async fn list_bakeries(
    state: State<AppState>,
) -> Result<PrettyJson<Vec<BakeryView>>, ApiError> {
    let bakeries = QueryCore::find_bakeries_with_baked_goods(&state.conn).await?;

    Ok(PrettyJson(
        bakeries.into_iter().map(BakeryView::from).collect(),
    ))
}

pub async fn show_bakery(
    state: State<AppState>,
    path: IdPath,
) -> Result<PrettyJson<BakeryView>, ApiError> {
    let id = path.or_not_found(BAKERY_NOT_FOUND)?;
    let bakery = QueryCore::find_bakery_with_baked_goods(&state.conn, id)
        .await?
        .ok_or(ApiError::NotFound(BAKERY_NOT_FOUND))?;

    Ok(PrettyJson(bakery.into()))
}

pub async fn update_bakery(
    state: State<AppState>,
    path: IdPath,
    FormFields(form): FormFields<BakeryNameForm>,
) -> Result<PrettyJson<BakeryView>, ApiError> {
    let id = path.or_not_found(BAKERY_NOT_FOUND)?;
    let name = form.into_name();
    let renamed = name.is_some();

    let bakery = MutationCore::update_bakery_name(&state.conn, id, name)
        .await?
        .ok_or(ApiError::NotFound(BAKERY_NOT_FOUND))?;
    if renamed {
        tracing::info!(id, name = %bakery.name, "bakery renamed");
    }

    let baked_goods = QueryCore::find_baked_goods_of_bakery(&state.conn, &bakery).await?;

    Ok(PrettyJson((bakery, baked_goods).into()))
}

pub async fn baked_goods_by_price(
    state: State<AppState>,
) -> Result<PrettyJson<Vec<BakedGoodView>>, ApiError> {
    let baked_goods = QueryCore::find_baked_goods_by_price(&state.conn).await?;

    Ok(PrettyJson(
        baked_goods.into_iter().map(BakedGoodView::from).collect(),
    ))
}

pub async fn most_expensive_baked_good(
    state: State<AppState>,
) -> Result<PrettyJson<BakedGoodView>, ApiError> {
    let baked_good = QueryCore::find_most_expensive_baked_good(&state.conn)
        .await?
        .ok_or(ApiError::NotFound(NO_BAKED_GOODS))?;

    Ok(PrettyJson(baked_good.into()))
}

pub async fn create_baked_good(
    state: State<AppState>,
    FormFields(form): FormFields<RawBakedGoodForm>,
) -> Result<(StatusCode, PrettyJson<BakedGoodView>), ApiError> {
    let new = form.validate()?;

    let baked_good = MutationCore::create_baked_good(&state.conn, new).await?;
    tracing::info!(
        id = baked_good.id,
        bakery_id = baked_good.bakery_id,
        "baked good created"
    );

    Ok((StatusCode::CREATED, PrettyJson(baked_good.into())))
}

pub async fn delete_baked_good(
    state: State<AppState>,
    path: IdPath,
) -> Result<PrettyJson<Message>, ApiError> {
    let id = path.or_not_found(BAKED_GOOD_NOT_FOUND)?;
    let result = MutationCore::delete_baked_good(&state.conn, id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(BAKED_GOOD_NOT_FOUND));
    }
    tracing::info!(id, "baked good deleted");

    Ok(PrettyJson(Message {
        message: "Baked good deleted",
    }))
}
