//! `/auth/*` endpoints.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthPayload, Brand, BrandsUpdate, ProfileUpdate, RegisterRequest, User};

#[derive(Serialize)]
struct Credentials<'a> {
    email: String,
    password: &'a str,
}

#[derive(Serialize)]
struct BrandsBody<'a> {
    brands: &'a [Brand],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

impl ApiClient {
    /// `POST /auth/login`. The email is lowercased and trimmed before sending.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let body = Credentials {
            email: email.trim().to_lowercase(),
            password,
        };
        self.send(Method::POST, "/auth/login", &body)
            .await?
            .into_data()
    }

    /// `POST /auth/register`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        self.send(Method::POST, "/auth/register", request)
            .await?
            .into_data()
    }

    /// `GET /auth/me`: the user the current token belongs to.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me", &[]).await?.into_data()
    }

    /// `PUT /auth/brands`: replace the monitored brand list.
    pub async fn update_brands(&self, brands: &[Brand]) -> Result<BrandsUpdate, ApiError> {
        self.send(Method::PUT, "/auth/brands", &BrandsBody { brands })
            .await?
            .into_data()
    }

    /// `PUT /auth/profile`. Returns the updated user.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.send(Method::PUT, "/auth/profile", update)
            .await?
            .into_data()
    }

    /// `PUT /auth/password`. Returns the backend's confirmation message, if any.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Option<String>, ApiError> {
        let body = PasswordChange {
            current_password,
            new_password,
        };
        let envelope = self
            .send::<_, Value>(Method::PUT, "/auth/password", &body)
            .await?;
        Ok(envelope.message)
    }

    /// `POST /auth/forgot-password`. Works without a token.
    pub async fn forgot_password(&self, email: &str) -> Result<Option<String>, ApiError> {
        let envelope = self
            .send::<_, Value>(
                Method::POST,
                "/auth/forgot-password",
                &EmailBody {
                    email: email.trim(),
                },
            )
            .await?;
        Ok(envelope.message)
    }

    /// `DELETE /auth/account`.
    pub async fn delete_account(&self) -> Result<Option<String>, ApiError> {
        let envelope = self
            .send_empty::<Value>(Method::DELETE, "/auth/account")
            .await?;
        Ok(envelope.message)
    }
}
