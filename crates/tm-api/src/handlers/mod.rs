use crate::error::ApiError;

pub mod health;
pub mod matches;

pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".into())
}
