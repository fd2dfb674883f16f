//! Typed form bodies and the extractors that read them.

use axum::{
    extract::{Form, FromRequest, FromRequestParts, Multipart, Path, Request},
    http::{StatusCode, header, request::Parts},
};
use bakery_service::NewBakedGood;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::convert::Infallible;
use thiserror::Error;

use crate::error::ApiError;

/// Why a submitted baked good was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name, price, and bakery_id are required")]
    Missing,
    #[error("price must be a number; bakery_id must be an integer")]
    Malformed,
}

/// Fields of `PATCH /bakeries/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct BakeryNameForm {
    pub name: Option<String>,
}

impl BakeryNameForm {
    /// The new name, if one was actually supplied. Empty means "keep".
    pub fn into_name(self) -> Option<String> {
        self.name.filter(|name| !name.is_empty())
    }
}

/// Fields of `POST /baked_goods`, exactly as submitted.
#[derive(Debug, Default, Deserialize)]
pub struct RawBakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

impl RawBakedGoodForm {
    pub fn validate(self) -> Result<NewBakedGood, FormError> {
        let (Some(name), Some(price), Some(bakery_id)) = (
            self.name.filter(|name| !name.is_empty()),
            self.price,
            self.bakery_id,
        ) else {
            return Err(FormError::Missing);
        };

        let price = price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or(FormError::Malformed)?;
        let bakery_id = bakery_id
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::Malformed)?;

        Ok(NewBakedGood {
            name,
            price,
            bakery_id,
        })
    }
}

/// Form fields sent url-encoded or as `multipart/form-data`.
///
/// A body that cannot be read as a form yields `T::default()`. Multipart file
/// parts are skipped.
pub struct FormFields<T>(pub T);

impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        let fields = if is_multipart {
            match read_multipart(req, state).await {
                Ok(fields) => fields,
                Err(err) => {
                    tracing::debug!(error = %err, "treating unreadable multipart body as empty");
                    T::default()
                }
            }
        } else {
            match Form::<T>::from_request(req, state).await {
                Ok(Form(fields)) => fields,
                Err(rejection) => {
                    tracing::debug!(%rejection, "treating unreadable form body as empty");
                    T::default()
                }
            }
        };

        Ok(Self(fields))
    }
}

async fn read_multipart<S, T>(req: Request, state: &S) -> anyhow::Result<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    let mut multipart = Multipart::from_request(req, state).await?;
    let mut fields = Map::new();

    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let text = field.text().await?;
        // first occurrence wins
        fields.entry(name).or_insert(Value::String(text));
    }

    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// An `{id}` path segment made only of ASCII digits.
///
/// Any other segment is a plain 404. Digits that do not fit an `i32` cannot
/// name a stored row, so they resolve to the route's own not-found error.
pub struct IdPath(pub Option<i32>);

impl IdPath {
    pub fn or_not_found(self, message: &'static str) -> Result<i32, ApiError> {
        self.0.ok_or(ApiError::NotFound(message))
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        parse_id(&segment).ok_or(StatusCode::NOT_FOUND).map(Self)
    }
}

/// `None` for a non-integer segment, `Some(None)` for an integer out of range.
fn parse_id(segment: &str) -> Option<Option<i32>> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(segment.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, price: Option<&str>, bakery_id: Option<&str>) -> RawBakedGoodForm {
        RawBakedGoodForm {
            name: name.map(str::to_owned),
            price: price.map(str::to_owned),
            bakery_id: bakery_id.map(str::to_owned),
        }
    }

    #[test]
    fn accepts_well_formed_fields() {
        let new = form(Some("Croissant"), Some("3.50"), Some("1"))
            .validate()
            .unwrap();

        assert_eq!(
            new,
            NewBakedGood {
                name: "Croissant".to_owned(),
                price: 3.5,
                bakery_id: 1,
            }
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let new = form(Some("Bun"), Some(" 2 "), Some(" 7 ")).validate().unwrap();
        assert_eq!(new.price, 2.0);
        assert_eq!(new.bakery_id, 7);
    }

    #[test]
    fn missing_or_empty_fields() {
        for raw in [
            form(None, Some("1.0"), Some("1")),
            form(Some(""), Some("1.0"), Some("1")),
            form(Some("Bun"), None, Some("1")),
            form(Some("Bun"), Some("1.0"), None),
            RawBakedGoodForm::default(),
        ] {
            assert_eq!(raw.validate(), Err(FormError::Missing));
        }
    }

    #[test]
    fn unparseable_fields() {
        for raw in [
            form(Some("Bun"), Some("abc"), Some("1")),
            form(Some("Bun"), Some(""), Some("1")),
            form(Some("Bun"), Some("NaN"), Some("1")),
            form(Some("Bun"), Some("inf"), Some("1")),
            form(Some("Bun"), Some("1.0"), Some("1.5")),
            form(Some("Bun"), Some("1.0"), Some("one")),
        ] {
            assert_eq!(raw.validate(), Err(FormError::Malformed));
        }
    }

    #[test]
    fn missing_wins_over_malformed() {
        assert_eq!(
            form(None, Some("abc"), Some("x")).validate(),
            Err(FormError::Missing)
        );
    }

    #[test]
    fn id_segments() {
        assert_eq!(parse_id("7"), Some(Some(7)));
        assert_eq!(parse_id("007"), Some(Some(7)));
        assert_eq!(parse_id("2147483647"), Some(Some(i32::MAX)));
        assert_eq!(parse_id("3000000000"), Some(None));
        assert_eq!(parse_id("123456789012345678901234567890"), Some(None));

        for segment in ["", "abc", "1.5", "-1", "+1", " 1", "1e3"] {
            assert_eq!(parse_id(segment), None, "{segment:?}");
        }
    }

    #[test]
    fn empty_name_keeps_the_old_one() {
        let keep = BakeryNameForm {
            name: Some(String::new()),
        };
        assert_eq!(keep.into_name(), None);
        assert_eq!(BakeryNameForm::default().into_name(), None);

        let rename = BakeryNameForm {
            name: Some("Night Owl Bakery".to_owned()),
        };
        assert_eq!(rename.into_name().as_deref(), Some("Night Owl Bakery"));
    }
}
