//! Request Body Extraction
//!
//! Handlers read their input through [`RequestBody`], which accepts JSON
//! and urlencoded form posts alike. Rejections come back as ValueErrors on
//! the `body` field, so a malformed post still answers with an `ErrorBody`.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{Form, FromRequest, Request};
use axum::http::header;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body decoded from JSON or a urlencoded form
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBody<T>(pub T);

impl<S, T> FromRequest<S> for RequestBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().starts_with(FORM_CONTENT_TYPE))
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::MissingJsonContentType(_) => "Request body must be JSON or form data.",
            JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON.",
            JsonRejection::JsonDataError(_) => "Request body has an unexpected shape.",
            _ => "Request body could not be read.",
        };
        tracing::debug!(rejection = %rejection.body_text(), "JSON body rejected");
        AppError::value("body", message).with_source(rejection)
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Form body rejected");
        AppError::value("body", "Request body is not a valid form.").with_source(rejection)
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    use super::*;
    use crate::error::kind::ErrorKind;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Login {
        email: String,
        password: String,
    }

    fn post(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn extract(req: Request) -> Result<Login, AppError> {
        RequestBody::<Login>::from_request(req, &())
            .await
            .map(|RequestBody(login)| login)
    }

    #[tokio::test]
    async fn test_json_body() {
        let login = extract(post(
            Some("application/json"),
            r#"{"email":"a@b.com","password":"pw"}"#,
        ))
        .await
        .unwrap();
        assert_eq!(login.email, "a@b.com");
        assert_eq!(login.password, "pw");
    }

    #[tokio::test]
    async fn test_form_body() {
        let login = extract(post(
            Some("application/x-www-form-urlencoded; charset=UTF-8"),
            "email=a%40b.com&password=pw",
        ))
        .await
        .unwrap();
        assert_eq!(login.email, "a@b.com");
        assert_eq!(login.password, "pw");
    }

    #[tokio::test]
    async fn test_malformed_json_is_value_error() {
        let err = extract(post(Some("application/json"), "{not json"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueError);
        assert_eq!(err.field(), Some("body"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST.as_u16());
    }

    #[tokio::test]
    async fn test_wrong_shape_and_content_type() {
        let err = extract(post(Some("application/json"), r#"{"email":42}"#))
            .await
            .unwrap_err();
        assert_eq!(err.field(), Some("body"));

        let err = extract(post(Some("text/plain"), "email=a"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueError);
        assert_eq!(err.message(), "Request body must be JSON or form data.");

        let err = extract(post(None, "")).await.unwrap_err();
        assert_eq!(err.field(), Some("body"));
    }
}
