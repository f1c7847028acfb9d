//! Authentication endpoints: register, login, and OTP phone verification.
//!
//! All credential handling is backend-owned. The client submits the form
//! payloads and, on success, receives a bearer token plus the user profile;
//! installing the token on the client and persisting the profile are the
//! caller's job (see `state::AppState::complete_login`).

use medikart_core::{Email, Phone};
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::models::UserProfile;

/// Registration form payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: Phone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    pub password: String,
}

/// Successful auth response: a bearer token and the accepted profile.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
struct PhonePayload<'a> {
    phone: &'a Phone,
}

#[derive(Debug, Serialize)]
struct LoginPayload<'a> {
    phone: &'a Phone,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpPayload<'a> {
    phone: &'a Phone,
    otp: &'a str,
}

// The OTP send endpoint returns only an acknowledgement envelope.
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}

impl ApiClient {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with the backend's message when the phone
    /// or email is already registered.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("api/auth/register", request).await
    }

    /// Log in with phone and password.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` on bad credentials.
    pub async fn login(&self, phone: &Phone, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_json("api/auth/login", &LoginPayload { phone, password })
            .await
    }

    /// Request an OTP code for phone verification.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RateLimited` when codes are requested too often.
    pub async fn send_otp(&self, phone: &Phone) -> Result<(), ApiError> {
        let _: Acknowledgement = self
            .post_json("api/auth/send-otp", &PhonePayload { phone })
            .await?;
        Ok(())
    }

    /// Verify an OTP code, establishing a session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` on a wrong or expired code.
    pub async fn verify_otp(&self, phone: &Phone, otp: &str) -> Result<AuthResponse, ApiError> {
        self.post_json("api/auth/verify-otp", &VerifyOtpPayload { phone, otp })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_omits_absent_email() {
        let request = RegisterRequest {
            name: "Asha".into(),
            phone: "+919876543210".parse().unwrap(),
            email: None,
            password: "hunter2-but-long".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["phone"], "+919876543210");
    }

    #[test]
    fn test_auth_response_shape() {
        let response: AuthResponse = serde_json::from_str(
            r#"{
                "token": "jwt-abc",
                "user": {"_id": "u-1", "name": "Asha", "phone": "+919876543210"}
            }"#,
        )
        .unwrap();
        assert_eq!(response.token, "jwt-abc");
        assert_eq!(response.user.id, "u-1");
    }
}
