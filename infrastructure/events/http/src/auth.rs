use axum::{extract::FromRequestParts, http::request::Parts};
use common_errors::AppError;
use uuid::Uuid;

/// The authenticated caller, taken from the `x-user-id` header that the
/// upstream authentication proxy injects after verifying the session.
/// Identity arrives as explicit per-request context; nothing in the
/// service consults ambient user state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

pub const USER_ID_HEADER: &str = "x-user-id";

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts, _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(
                    "UNAUTHORIZED",
                    "Missing x-user-id header",
                )
            })?;

        let user_id = Uuid::parse_str(header).map_err(|_| {
            AppError::unauthorized(
                "UNAUTHORIZED",
                "Invalid x-user-id header",
            )
        })?;

        Ok(CurrentUser(user_id))
    }
}
