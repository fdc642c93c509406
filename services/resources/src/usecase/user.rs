use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, generate_otp_secret, hash_password};
use crate::error::ResourceServiceError;

fn required(value: Option<String>, field: &'static str) -> Result<String, ResourceServiceError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ResourceServiceError::MissingData(field))
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ResourceServiceError> {
        let username = required(input.username, "username")?;
        let password = required(input.password, "password")?;
        let email = required(input.email, "email")?;

        let user = self
            .repo
            .create(&NewUser {
                username,
                password_hash: hash_password(&password),
                otp_secret: generate_otp_secret(),
                email,
            })
            .await?;
        tracing::info!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, username: &str) -> Result<User, ResourceServiceError> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or(ResourceServiceError::UserNotFound)
    }
}
