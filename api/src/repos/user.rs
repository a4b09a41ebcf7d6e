//! Auth and profile endpoints

use super::require_not_blank;
use crate::envelope;
use crate::error::ClientError;
use crate::outcome::Outcome;
use crate::transport::Transport;
use courtside_types::{LoginData, ProfileUpdate, UserProfile};
use serde_json::json;
use std::sync::Arc;

const LOGIN_PATH: &str = "/user/login";
const LOGOUT_PATH: &str = "/user/logout";
const PROFILE_PATH: &str = "/user/profile";
const UPDATE_PROFILE_PATH: &str = "/user/profile/update";

/// Client for the auth and profile endpoints.
pub struct UserRepo {
    transport: Arc<dyn Transport>,
}

impl UserRepo {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Exchange credentials for a token plus the user's profile.
    pub async fn login(&self, username: &str, password: &str) -> Outcome<LoginData> {
        Outcome::guard(async {
            require_not_blank("username", username)?;
            require_not_blank("password", password)?;
            let body = json!({ "username": username, "password": password });
            let raw = self.transport.post(LOGIN_PATH, body).await?;
            envelope::decode(raw)
        })
        .await
    }

    /// Invalidate the current token server-side.
    pub async fn logout(&self) -> Outcome<()> {
        Outcome::guard(async {
            let raw = self.transport.post(LOGOUT_PATH, json!({})).await?;
            envelope::decode_ack(raw)
        })
        .await
    }

    /// Fetch the profile of the session user.
    pub async fn profile(&self) -> Outcome<UserProfile> {
        Outcome::guard(async {
            let raw = self.transport.get(PROFILE_PATH, &[]).await?;
            envelope::decode(raw)
        })
        .await
    }

    /// Apply a partial profile update; returns the updated profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Outcome<UserProfile> {
        Outcome::guard(async {
            if update.is_empty() {
                return Err(ClientError::Validation(
                    "profile update must set at least one field".to_string(),
                ));
            }
            if let Some(ref nickname) = update.nickname {
                require_not_blank("nickname", nickname)?;
            }
            let body = serde_json::to_value(update)?;
            let raw = self.transport.post(UPDATE_PROFILE_PATH, body).await?;
            envelope::decode(raw)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockCall, MockTransport};
    use serde_json::json;

    fn login_payload() -> serde_json::Value {
        json!({
            "token": "tok1",
            "user": {"user_id": "u1", "nickname": "alice", "points": 120}
        })
    }

    #[tokio::test]
    async fn test_login_success_decodes_payload() {
        let mock = MockTransport::new().with_data(LOGIN_PATH, login_payload());
        let repo = UserRepo::new(Arc::new(mock));

        let outcome = repo.login("alice", "secret").await;
        let data = outcome.success().expect("login should succeed");
        assert_eq!(data.token, "tok1");
        assert_eq!(data.user.nickname, "alice");
        assert_eq!(data.user.points, 120);
    }

    #[tokio::test]
    async fn test_login_failure_carries_server_message() {
        let mock = MockTransport::new().with_status_code(LOGIN_PATH, 0, "bad password");
        let repo = UserRepo::new(Arc::new(mock));

        let outcome = repo.login("alice", "wrong").await;
        match outcome.error() {
            Some(ClientError::Api { code, message }) => {
                assert_eq!(*code, 0);
                assert_eq!(message, "bad password");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_credentials_never_reach_the_wire() {
        let mock = Arc::new(MockTransport::new().with_data(LOGIN_PATH, login_payload()));
        let repo = UserRepo::new(mock.clone());

        let outcome = repo.login("  ", "secret").await;
        assert!(matches!(outcome.error(), Some(ClientError::Validation(_))));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_logout_is_an_ack() {
        let mock = MockTransport::new().with_data(LOGOUT_PATH, json!(null));
        // code 1 with null data is fine for acks
        let mock = mock.with_json(LOGOUT_PATH, json!({"code": 1, "msg": "ok"}));
        let repo = UserRepo::new(Arc::new(mock));

        assert!(repo.logout().await.is_success());
    }

    #[tokio::test]
    async fn test_empty_profile_update_is_rejected() {
        let mock = Arc::new(MockTransport::new());
        let repo = UserRepo::new(mock.clone());

        let outcome = repo.update_profile(&ProfileUpdate::default()).await;
        assert!(matches!(outcome.error(), Some(ClientError::Validation(_))));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_profile_posts_only_set_fields() {
        let mock = Arc::new(MockTransport::new().with_data(
            UPDATE_PROFILE_PATH,
            json!({"user_id": "u1", "nickname": "bob"}),
        ));
        let repo = UserRepo::new(mock.clone());

        let update = ProfileUpdate {
            nickname: Some("bob".to_string()),
            ..Default::default()
        };
        let profile = repo.update_profile(&update).await.success().unwrap();
        assert_eq!(profile.nickname, "bob");

        match &mock.calls()[0] {
            MockCall::Post { body, .. } => {
                assert_eq!(body, &json!({"nickname": "bob"}));
            }
            other => panic!("expected Post, got {:?}", other),
        }
    }
}
