use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

use super::{
    dto::{
        ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, ProfileResponse,
        PublicUser, RegisterRequest, RegisterResponse, ResetPasswordRequest,
        UpdateProfileRequest, UserProfile,
    },
    extractors::AuthUser,
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo_types::User,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/auth/forgot-password", post(forgot_password))
        .route("/auth/reset-password", post(reset_password))
}

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/users/profile", put(update_profile))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    // Uniqueness precondition; the DB UNIQUE constraint backs this up.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already in use");
        return Err(ApiError::Validation("Email already in use".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.username, &payload.email, &hash).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".into(),
            user: PublicUser::from(user),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::Validation("Email not found".into()));
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = user.id, "login wrong password");
        return Err(ApiError::Validation("Wrong password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign_session(user.id)?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token,
        user: UserProfile::from(user),
    }))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = User::update_profile(&state.db, user_id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    info!(user_id, "profile updated");
    Ok(Json(ProfileResponse {
        message: "Profile updated".into(),
        user: UserProfile::from(user),
    }))
}

#[instrument(skip(state, payload))]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "forgot-password unknown email");
            return Err(ApiError::NotFound("Email not registered".into()));
        }
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign_reset(user.id)?;

    // No mail delivery in this deployment; the link lands in the server log
    // where the operator can hand it to the user.
    let reset_link = format!("{}/reset-password/{}", state.config.frontend_origin, token);
    info!(user_id = user.id, %reset_link, "password reset link issued");

    Ok(Json(MessageResponse {
        message: "Reset link has been sent to the server log".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys.verify_reset(&payload.token).map_err(|_| {
        warn!("invalid or expired reset token");
        ApiError::Authorization("invalid or expired reset token".into())
    })?;

    let hash = hash_password(&payload.password)?;
    let updated = User::update_password(&state.db, claims.sub, &hash).await?;
    if updated == 0 {
        return Err(ApiError::NotFound("User not found".into()));
    }

    info!(user_id = claims.sub, "password reset completed");
    Ok(Json(MessageResponse {
        message: "Password updated".into(),
    }))
}
