//! Reqwest-backed users source adapter.
//!
//! This adapter owns transport details only: request serialisation, HTTP
//! error mapping, and JSON decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::Value;

use super::dto::{NewUserDto, UserDto};
use crate::domain::ports::{RemoteUsersError, RemoteUsersSource};
use crate::domain::{NewUser, User};

const USERS_RESOURCE: &str = "users";

/// Errors raised while building the adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpUsersSourceBuildError {
    /// The base URL cannot carry a `users` path segment.
    #[error("cannot derive users resource from base url {base}: {source}")]
    ResourceUrl {
        /// Offending base URL.
        base: Url,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The reqwest client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Users source that performs GET/POST requests against `<base>/users`.
pub struct HttpUsersSource {
    client: Client,
    resource: Url,
}

impl HttpUsersSource {
    /// Build an adapter for `base`, optionally bounding each request.
    ///
    /// No timeout is applied when `timeout` is `None`.
    /// ```rust,ignore
    /// let source = HttpUsersSource::new(Url::parse("http://localhost:3000")?, None)?;
    /// assert_eq!(source.resource().as_str(), "http://localhost:3000/users");
    /// ```
    /// # Errors
    ///
    /// Returns an error when the resource URL cannot be derived or the reqwest
    /// client cannot be constructed.
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self, HttpUsersSourceBuildError> {
        let resource = resource_url(&base)
            .map_err(|source| HttpUsersSourceBuildError::ResourceUrl { base, source })?;
        let mut builder = Client::builder();
        if let Some(limit) = timeout {
            builder = builder.timeout(limit);
        }
        Ok(Self {
            client: builder.build()?,
            resource,
        })
    }

    /// Fully-qualified users resource URL.
    #[must_use]
    pub const fn resource(&self) -> &Url {
        &self.resource
    }
}

#[async_trait]
impl RemoteUsersSource for HttpUsersSource {
    async fn fetch_users(&self) -> Result<Vec<User>, RemoteUsersError> {
        let body = send(self.client.get(self.resource.clone())).await?;
        decode_user_list(body)
    }

    async fn create_user(&self, candidate: &NewUser) -> Result<User, RemoteUsersError> {
        let request = self
            .client
            .post(self.resource.clone())
            .json(&NewUserDto::from(candidate));
        let body = send(request).await?;
        decode_user(body)
    }
}

fn resource_url(base: &Url) -> Result<Url, url::ParseError> {
    let mut directory = base.clone();
    if !directory.path().ends_with('/') {
        let path = format!("{}/", directory.path());
        directory.set_path(&path);
    }
    directory.join(USERS_RESOURCE)
}

async fn send(request: RequestBuilder) -> Result<Value, RemoteUsersError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(map_status_error(response).await);
    }

    let body = response.bytes().await.map_err(map_transport_error)?;
    parse_json(body.as_ref())
}

async fn map_status_error(response: Response) -> RemoteUsersError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    RemoteUsersError::status(status, body)
}

fn map_transport_error(error: reqwest::Error) -> RemoteUsersError {
    RemoteUsersError::transport(error.to_string())
}

fn parse_json(body: &[u8]) -> Result<Value, RemoteUsersError> {
    serde_json::from_slice(body).map_err(|error| RemoteUsersError::decode(error.to_string()))
}

fn decode_user_list(body: Value) -> Result<Vec<User>, RemoteUsersError> {
    if !body.is_array() {
        return Err(RemoteUsersError::unexpected_shape(format!(
            "expected a list of users, got {}",
            json_kind(&body)
        )));
    }
    let users: Vec<UserDto> = serde_json::from_value(body)
        .map_err(|error| RemoteUsersError::unexpected_shape(error.to_string()))?;
    Ok(users.into_iter().map(User::from).collect())
}

fn decode_user(body: Value) -> Result<User, RemoteUsersError> {
    if !body.is_object() {
        return Err(RemoteUsersError::unexpected_shape(format!(
            "expected a user object, got {}",
            json_kind(&body)
        )));
    }
    let user: UserDto = serde_json::from_value(body)
        .map_err(|error| RemoteUsersError::unexpected_shape(error.to_string()))?;
    Ok(user.into())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network decoding helpers.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("http://localhost:3000", "http://localhost:3000/users")]
    #[case("http://localhost:3000/", "http://localhost:3000/users")]
    #[case("http://example.test/api", "http://example.test/api/users")]
    #[case("http://example.test/api/", "http://example.test/api/users")]
    fn derives_users_resource_from_base(#[case] base: &str, #[case] expected: &str) {
        let base = Url::parse(base).expect("valid base");
        let resource = resource_url(&base).expect("resource url");
        assert_eq!(resource.as_str(), expected);
    }

    #[rstest]
    fn decodes_user_list() {
        let users = decode_user_list(json!([
            { "id": 9, "name": "lu", "email": "lu@x.com" },
            { "id": 10, "name": "ana", "email": "ana@x.com", "role": "admin" }
        ]))
        .expect("list should decode");

        assert_eq!(
            users,
            vec![
                User::new(9, "lu", "lu@x.com"),
                User::new(10, "ana", "ana@x.com"),
            ]
        );
    }

    #[rstest]
    #[case::object(json!({ "users": [] }))]
    #[case::string(json!("users"))]
    #[case::null(json!(null))]
    #[case::bad_element(json!([{ "id": "nine", "name": "lu", "email": "lu@x.com" }]))]
    #[case::missing_field(json!([{ "id": 9, "name": "lu" }]))]
    fn rejects_non_list_bodies(#[case] body: Value) {
        let error = decode_user_list(body).expect_err("decode should fail");
        assert!(
            matches!(error, RemoteUsersError::UnexpectedShape { .. }),
            "shape drift should map to UnexpectedShape, got {error:?}",
        );
    }

    #[rstest]
    fn decodes_single_user() {
        let user = decode_user(json!({ "id": 7, "name": "ana", "email": "ana@x.com" }))
            .expect("user should decode");
        assert_eq!(user, User::new(7, "ana", "ana@x.com"));
    }

    #[rstest]
    #[case::list(json!([{ "id": 7, "name": "ana", "email": "ana@x.com" }]))]
    #[case::empty(json!({}))]
    fn rejects_non_user_bodies(#[case] body: Value) {
        let error = decode_user(body).expect_err("decode should fail");
        assert!(matches!(error, RemoteUsersError::UnexpectedShape { .. }));
    }

    #[rstest]
    fn invalid_json_maps_to_decode_error() {
        let error = parse_json(b"<html>oops</html>").expect_err("parse should fail");
        assert!(matches!(error, RemoteUsersError::Decode { .. }));
    }
}
