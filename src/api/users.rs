//! User management API handlers
//!
//! Contains HTTP request handlers for user CRUD operations.

use crate::error::AppError;
use crate::state::{SharedStore, User, UserId};
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Message returned by a successful delete
pub const REMOVED_MESSAGE: &str = "removed successfully";

/// Message response
#[derive(Debug, Serialize, PartialEq)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// Create or update user request
///
/// Both fields are optional at the decoding stage so that a missing field
/// surfaces as `invalid data` rather than a decoder rejection.
#[derive(Debug, Default, Deserialize)]
pub struct UserRequest {
    /// Name of the user
    pub name: Option<String>,
    /// Phone number of the user
    pub phone: Option<String>,
}

fn parse_id(raw: &str) -> Result<UserId, AppError> {
    User::parse_id(raw).ok_or_else(|| AppError::NotFound(raw.to_string()))
}

fn decode(payload: Result<Json<UserRequest>, JsonRejection>) -> Result<UserRequest, AppError> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.starts_with("application/") && mime.ends_with("json")
        })
        .unwrap_or(false)
}

/// Decode an update body
///
/// An empty body or a non-JSON content type reads as no fields at all.
/// Only a JSON body that fails to parse is rejected.
fn decode_update(headers: &HeaderMap, body: &Bytes) -> Result<UserRequest, AppError> {
    if body.is_empty() || !is_json(headers) {
        return Ok(UserRequest::default());
    }
    decode(Json::from_bytes(body))
}

/// GET /usuarios - List all users
pub async fn list_users(State(store): State<SharedStore>) -> Json<Vec<User>> {
    let store = store.read().await;
    Json(store.list().to_vec())
}

/// GET /usuarios/:id - Get a specific user
pub async fn get_user(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id)?;
    let store = store.read().await;
    let user = store
        .get(id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    Ok(Json(user.clone()))
}

/// POST /usuarios - Create a new user
pub async fn create_user(
    State(store): State<SharedStore>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let request = decode(payload)?;
    let name = request.name.unwrap_or_default();
    let phone = request.phone.unwrap_or_default();

    let mut store = store.write().await;
    let user = store.create(name, phone).map_err(AppError::InvalidInput)?;
    info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /usuarios/:id - Update a user
///
/// Name and phone are overwritten as sent; absent fields become empty.
pub async fn update_user(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id)?;
    let request = decode_update(&headers, &body);

    let mut store = store.write().await;
    let request = match request {
        Ok(request) => request,
        // Unknown IDs report NotFound whatever the body
        Err(err) if store.get(id).is_some() => return Err(err),
        Err(_) => return Err(AppError::NotFound(id.to_string())),
    };

    let user = store
        .update(
            id,
            request.name.unwrap_or_default(),
            request.phone.unwrap_or_default(),
        )
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    info!(user_id = id, "User updated");

    Ok(Json(user.clone()))
}

/// DELETE /usuarios/:id - Delete a user
pub async fn delete_user(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let mut store = store.write().await;
    store
        .remove(id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    info!(user_id = id, "User removed");

    Ok(Json(MessageResponse {
        message: REMOVED_MESSAGE.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UserStore;

    fn request(
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Json<UserRequest>, JsonRejection> {
        Ok(Json(UserRequest {
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
        }))
    }

    fn body(content_type: Option<&str>, raw: &str) -> (HeaderMap, Bytes) {
        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(header::CONTENT_TYPE, content_type.parse().unwrap());
        }
        (headers, Bytes::from(raw.to_string()))
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let store = UserStore::shared();
        let Json(users) = list_users(State(store)).await;
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_create_user() {
        let store = UserStore::shared();
        let result =
            create_user(State(store.clone()), request(Some("Alice"), Some("123-456"))).await;
        let (status, Json(user)) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");

        let Json(users) = list_users(State(store)).await;
        assert_eq!(users, vec![user]);
    }

    #[tokio::test]
    async fn test_create_user_missing_phone() {
        let store = UserStore::shared();
        let result = create_user(State(store.clone()), request(Some("Alice"), None)).await;
        match result.unwrap_err() {
            AppError::InvalidInput(_) => {}
            other => panic!("Expected InvalidInput error, got: {:?}", other),
        }
        assert_eq!(store.read().await.next_id(), 1);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let store = UserStore::shared();
        let result = get_user(State(store), Path("9999".to_string())).await;
        match result.unwrap_err() {
            AppError::NotFound(_) => {}
            other => panic!("Expected NotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_user_unparseable_id() {
        let store = UserStore::shared();
        store
            .write()
            .await
            .create("Alice".to_string(), "123-456".to_string())
            .unwrap();

        let result = get_user(State(store), Path("one".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_user_without_fields_blanks_them() {
        let store = UserStore::shared();
        create_user(State(store.clone()), request(Some("Alice"), Some("123-456")))
            .await
            .unwrap();

        let (headers, bytes) = body(Some("application/json"), "{}");
        let Json(user) = update_user(State(store), Path("1".to_string()), headers, bytes)
            .await
            .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "");
        assert_eq!(user.phone, "");
    }

    #[tokio::test]
    async fn test_update_user_ignores_non_json_body() {
        let store = UserStore::shared();
        create_user(State(store.clone()), request(Some("Alice"), Some("123-456")))
            .await
            .unwrap();

        let (headers, bytes) = body(Some("text/plain"), "name=Bob");
        let Json(user) =
            update_user(State(store.clone()), Path("1".to_string()), headers, bytes)
                .await
                .unwrap();
        assert_eq!(user.name, "");

        let (headers, bytes) = body(None, "");
        let Json(user) = update_user(State(store), Path("1".to_string()), headers, bytes)
            .await
            .unwrap();
        assert_eq!(user.phone, "");
    }

    #[tokio::test]
    async fn test_update_user_broken_json() {
        let store = UserStore::shared();
        create_user(State(store.clone()), request(Some("Alice"), Some("123-456")))
            .await
            .unwrap();

        let (headers, bytes) = body(Some("application/json"), "{\"name\":");
        let result =
            update_user(State(store.clone()), Path("1".to_string()), headers, bytes).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(store.read().await.get(1).unwrap().name, "Alice");

        let (headers, bytes) = body(Some("application/json"), "{\"name\":");
        let result =
            update_user(State(store), Path("9999".to_string()), headers, bytes).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let store = UserStore::shared();
        create_user(State(store.clone()), request(Some("Alice"), Some("123-456")))
            .await
            .unwrap();

        let Json(response) = delete_user(State(store.clone()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(response.message, REMOVED_MESSAGE);
        assert!(store.read().await.is_empty());

        let result = delete_user(State(store), Path("1".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
