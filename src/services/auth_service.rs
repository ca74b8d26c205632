use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::activity::{Activity, NewActivity};
use crate::models::user::User;
use crate::services::token_service::{Claims, TokenService};
use crate::utils::crypto::verify_password;

const BAD_CREDENTIALS: &str = "invalid email or password";

/// Read access to user accounts by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Sink for audit activities written by the auth flow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRecorder: Send + Sync {
    async fn record(&self, activity: NewActivity) -> Result<Activity>;
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn CredentialStore>,
    activities: Arc<dyn ActivityRecorder>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn CredentialStore>,
        activities: Arc<dyn ActivityRecorder>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            activities,
            tokens,
        }
    }

    /// Checks the credentials, records a `login` activity and returns a fresh
    /// token with the authenticated user.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User)> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!(email, "Login attempt for unknown email");
            return Err(Error::BadRequest(BAD_CREDENTIALS.to_string()));
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(email, "Login attempt with wrong password");
            return Err(Error::BadRequest(BAD_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(&user)?;
        self.activities.record(NewActivity::login(&user.email)).await?;

        info!(user_id = user.id, role = %user.role, "User logged in");
        Ok((token, user))
    }

    /// Resolves the account a token was issued to.
    pub async fn user_from_token(&self, token: &str) -> Result<User> {
        let Claims { email, .. } = self.tokens.validate(token)?;
        self.users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| Error::NotFound("user with this email not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::role::Role;
    use crate::utils::crypto::hash_password;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn tokens() -> TokenService {
        TokenService::new(&Config::for_secret("auth-test")).unwrap()
    }

    fn stored_user(password: &str) -> User {
        User {
            id: 3,
            email: "hr@acme.com".to_string(),
            password_hash: hash_password(password).unwrap(),
            role: Role::Company,
            created_at: None,
        }
    }

    fn recorded(activity: NewActivity) -> Activity {
        Activity {
            id: 1,
            activity_type: activity.activity_type,
            description: activity.description,
            actor: activity.actor,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn login_issues_token_and_records_activity() {
        let user = stored_user("s3cret");
        let mut users = MockCredentialStore::new();
        users
            .expect_find_by_email()
            .with(eq("hr@acme.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let mut activities = MockActivityRecorder::new();
        activities
            .expect_record()
            .withf(|a| a.activity_type == "login" && a.actor == "hr@acme.com")
            .times(1)
            .returning(|a| Ok(recorded(a)));

        let service = AuthService::new(Arc::new(users), Arc::new(activities), tokens());
        let (token, user) = service.login("hr@acme.com", "s3cret").await.unwrap();

        assert_eq!(user.role, Role::Company);
        let claims = tokens().validate(&token).unwrap();
        assert_eq!(claims.email, "hr@acme.com");
        assert_eq!(claims.role, Role::Company);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_without_recording() {
        let user = stored_user("s3cret");
        let mut users = MockCredentialStore::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let mut activities = MockActivityRecorder::new();
        activities.expect_record().never();

        let service = AuthService::new(Arc::new(users), Arc::new(activities), tokens());
        let err = service.login("hr@acme.com", "guess").await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn unknown_email_is_rejected() {
        let mut users = MockCredentialStore::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        let mut activities = MockActivityRecorder::new();
        activities.expect_record().never();

        let service = AuthService::new(Arc::new(users), Arc::new(activities), tokens());
        let err = service.login("nobody@acme.com", "x").await.unwrap_err();
        assert_eq!(err.to_string(), BAD_CREDENTIALS);
    }

    #[tokio::test]
    async fn user_from_token_looks_up_the_token_email() {
        let user = stored_user("s3cret");
        let token = tokens().issue(&user).unwrap();
        let mut users = MockCredentialStore::new();
        users
            .expect_find_by_email()
            .with(eq("hr@acme.com"))
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(
            Arc::new(users),
            Arc::new(MockActivityRecorder::new()),
            tokens(),
        );
        let found = service.user_from_token(&token).await.unwrap();
        assert_eq!(found.id, 3);
    }

    #[tokio::test]
    async fn user_from_token_rejects_invalid_tokens() {
        let service = AuthService::new(
            Arc::new(MockCredentialStore::new()),
            Arc::new(MockActivityRecorder::new()),
            tokens(),
        );
        let err = service.user_from_token("nope").await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }
}
