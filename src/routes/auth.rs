use actix_web::{web, HttpResponse};
use mongodb::Client;
use serde_json::json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::user::{
    EmailRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, UserProfile,
};
use crate::services::account_service::{
    validate_email_request, validate_login, validate_registration, validate_reset,
    AccountService,
};
use crate::state::AppState;

const RESET_LINK_SENT: &str =
    "If an account with this email exists, you will receive a password reset link.";

/*
    /api/auth/register
*/
pub async fn register(
    state: web::Data<AppState>,
    client: web::Data<Arc<Client>>,
    input: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_registration(&input)?;

    let registration = AccountService::new(&client, &state)
        .register(input.into_inner())
        .await?;

    let message = if registration.email_sent {
        "Account created successfully! Please check your email for verification link."
    } else {
        "Account created successfully! Please check your email for verification link. If you don't receive it, contact support."
    };

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": message,
        "user": UserProfile::from(&registration.user),
    })))
}

/*
    /api/auth/login
*/
pub async fn login(
    state: web::Data<AppState>,
    client: web::Data<Arc<Client>>,
    input: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_login(&input)?;

    let (token, user) = AccountService::new(&client, &state)
        .login(input.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Login successful",
        "token": token,
        "user": UserProfile::from(&user),
    })))
}

/*
    /api/auth/verify-email/{token}
*/
pub async fn verify_email(
    state: web::Data<AppState>,
    client: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user = AccountService::new(&client, &state)
        .verify_email(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Email verified successfully! Welcome to GlobeTrotter!",
        "email": user.email,
    })))
}

/*
    /api/auth/forgot-password
*/
pub async fn forgot_password(
    state: web::Data<AppState>,
    client: web::Data<Arc<Client>>,
    input: web::Json<EmailRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_email_request(&input)?;

    AccountService::new(&client, &state)
        .forgot_password(input.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": RESET_LINK_SENT,
    })))
}

/*
    /api/auth/reset-password
*/
pub async fn reset_password(
    state: web::Data<AppState>,
    client: web::Data<Arc<Client>>,
    input: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_reset(&input)?;

    AccountService::new(&client, &state)
        .reset_password(input.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Password reset successfully! You can now login with your new password.",
    })))
}

/*
    /api/auth/resend-verification
*/
pub async fn resend_verification(
    state: web::Data<AppState>,
    client: web::Data<Arc<Client>>,
    input: web::Json<EmailRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_email_request(&input)?;

    AccountService::new(&client, &state)
        .resend_verification(input.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Verification email sent successfully!",
    })))
}

/*
    /api/auth/me (protected)
*/
pub async fn me(
    state: web::Data<AppState>,
    client: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let account = AccountService::new(&client, &state)
        .profile(&user.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "user": UserProfile::from(&account),
    })))
}
