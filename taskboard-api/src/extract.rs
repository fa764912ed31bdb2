/// Validated JSON request extraction
///
/// `ValidatedJson<T>` deserializes the request body and runs the type's
/// `validator` checks before the handler sees it. Malformed bodies and
/// failed field validation both reject as 400, so no request reaches
/// business logic unvalidated.
///
/// # Example
///
/// ```ignore
/// async fn create_user(
///     State(state): State<AppState>,
///     ValidatedJson(request): ValidatedJson<CreateUserRequest>,
/// ) -> ApiResult<Json<UserDto>> {
///     // request is deserialized and validated here
/// }
/// ```

use crate::error::ApiError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed schema validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name must not be empty"))]
        name: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let req = json_request(r#"{"name": "ok"}"#);
        let ValidatedJson(probe) = ValidatedJson::<Probe>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(probe.name, "ok");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let req = json_request("{not json");
        let err = ValidatedJson::<Probe>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let req = json_request("{}");
        let err = ValidatedJson::<Probe>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_failed_validation_carries_field_details() {
        let req = json_request(r#"{"name": ""}"#);
        let err = ValidatedJson::<Probe>::from_request(req, &())
            .await
            .unwrap_err();
        match err {
            ApiError::Validation(details) => {
                assert_eq!(details[0].field, "name");
                assert_eq!(details[0].message, "Name must not be empty");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
