use chrono::{Duration, Utc};
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::{Client, Collection};
use rand::{distributions::Alphanumeric, Rng};

use crate::error::{ApiError, FieldError};
use crate::middleware::auth::generate_token;
use crate::models::user::{
    EmailRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, User,
};
use crate::services::email_service::EmailService;
use crate::state::AppState;

const USERS_COLLECTION: &str = "users";
const TOKEN_LENGTH: usize = 32;
const VERIFICATION_TTL_HOURS: i64 = 24;
const RESET_TTL_HOURS: i64 = 1;
const MIN_PASSWORD_LENGTH: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    )
    .map(|re| re.is_match(email))
    .unwrap_or(false)
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn random_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

fn name_is_valid(name: &str) -> bool {
    (2..=50).contains(&name.trim().chars().count())
}

fn check(errors: Vec<FieldError>) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::InvalidFields(errors))
    }
}

fn email_error(email: &str) -> Option<FieldError> {
    (!is_valid_email(&normalize_email(email))).then_some(FieldError {
        field: "email",
        message: "Please enter a valid email",
    })
}

fn password_error(password: &str) -> Option<FieldError> {
    (password.chars().count() < MIN_PASSWORD_LENGTH).then_some(FieldError {
        field: "password",
        message: "Password must be at least 6 characters long",
    })
}

pub fn validate_registration(input: &RegisterRequest) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    if !name_is_valid(&input.first_name) {
        errors.push(FieldError {
            field: "firstName",
            message: "First name must be between 2 and 50 characters",
        });
    }
    if !name_is_valid(&input.last_name) {
        errors.push(FieldError {
            field: "lastName",
            message: "Last name must be between 2 and 50 characters",
        });
    }
    errors.extend(email_error(&input.email));
    errors.extend(password_error(&input.password));
    check(errors)
}

pub fn validate_login(input: &LoginRequest) -> Result<(), ApiError> {
    let mut errors: Vec<FieldError> = email_error(&input.email).into_iter().collect();
    if input.password.is_empty() {
        errors.push(FieldError {
            field: "password",
            message: "Password is required",
        });
    }
    check(errors)
}

pub fn validate_email_request(input: &EmailRequest) -> Result<(), ApiError> {
    check(email_error(&input.email).into_iter().collect())
}

pub fn validate_reset(input: &ResetPasswordRequest) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    if input.token.trim().is_empty() {
        errors.push(FieldError {
            field: "token",
            message: "Reset token is required",
        });
    }
    errors.extend(password_error(&input.password));
    check(errors)
}

fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("password hashing failed: {}", e)))
}

/// Outcome of a registration.
pub struct Registration {
    pub user: User,
    pub email_sent: bool,
}

/// Account operations over the users collection. Callers validate input
/// first; every method here may touch the database.
pub struct AccountService<'a> {
    users: Collection<User>,
    email: &'a EmailService,
    jwt_secret: &'a str,
}

impl<'a> AccountService<'a> {
    pub fn new(client: &Client, state: &'a AppState) -> Self {
        Self {
            users: client
                .database(&state.config.database)
                .collection(USERS_COLLECTION),
            email: &state.email,
            jwt_secret: &state.config.jwt_secret,
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }

    pub async fn register(&self, input: RegisterRequest) -> Result<Registration, ApiError> {
        let email = normalize_email(&input.email);
        if self.find_by_email(&email).await?.is_some() {
            return Err(ApiError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let token = random_token();
        let mut user = User {
            id: None,
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            email,
            password: hash_password(&input.password)?,
            is_email_verified: false,
            is_active: true,
            email_verification_token: Some(token.clone()),
            email_verification_expires: Some(now + Duration::hours(VERIFICATION_TTL_HOURS)),
            reset_password_token: None,
            reset_password_expires: None,
            last_login: None,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let result = self.users.insert_one(&user).await?;
        user.id = result.inserted_id.as_object_id();
        log::info!("Registered account {}", user.email);

        let email_sent = match self
            .email
            .send_email_verification(&user.email, &user.first_name, &token)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Verification email to {} failed: {}", user.email, e);
                false
            }
        };

        Ok(Registration { user, email_sent })
    }

    /// Checks credentials and returns a session token with the account.
    pub async fn login(&self, input: LoginRequest) -> Result<(String, User), ApiError> {
        let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

        let email = normalize_email(&input.email);
        let mut user = self.find_by_email(&email).await?.ok_or_else(invalid)?;

        if !user.is_active {
            return Err(ApiError::Unauthorized(
                "Account is deactivated. Please contact support.".to_string(),
            ));
        }
        if !bcrypt::verify(&input.password, &user.password).unwrap_or(false) {
            return Err(invalid());
        }

        let now = Utc::now();
        self.users
            .update_one(
                doc! { "email": email.as_str() },
                doc! { "$set": {
                    "last_login": bson::DateTime::from_chrono(now),
                    "updated_at": bson::DateTime::from_chrono(now),
                } },
            )
            .await?;
        user.last_login = Some(now);

        let user_id = user.id.map(|id| id.to_hex()).unwrap_or_default();
        let token = generate_token(&user.email, &user_id, self.jwt_secret)
            .map_err(|e| ApiError::internal(format!("token generation failed: {}", e)))?;

        Ok((token, user))
    }

    pub async fn verify_email(&self, token: &str) -> Result<User, ApiError> {
        let invalid = || ApiError::validation("Invalid or expired verification token");
        if token.trim().is_empty() {
            return Err(invalid());
        }

        let now = bson::DateTime::now();
        let mut user = self
            .users
            .find_one(doc! {
                "email_verification_token": token,
                "email_verification_expires": { "$gt": now },
            })
            .await?
            .ok_or_else(invalid)?;

        self.users
            .update_one(
                doc! { "_id": user.id },
                doc! {
                    "$set": { "is_email_verified": true, "updated_at": now },
                    "$unset": { "email_verification_token": "", "email_verification_expires": "" },
                },
            )
            .await?;
        user.is_email_verified = true;
        user.email_verification_token = None;
        user.email_verification_expires = None;

        if let Err(e) = self
            .email
            .send_welcome_email(&user.email, &user.first_name)
            .await
        {
            log::warn!("Welcome email to {} failed: {}", user.email, e);
        }

        Ok(user)
    }

    /// Issues a reset token when the account exists. Unknown addresses
    /// succeed silently.
    pub async fn forgot_password(&self, input: EmailRequest) -> Result<(), ApiError> {
        let email = normalize_email(&input.email);
        let Some(user) = self.find_by_email(&email).await? else {
            log::info!("Password reset requested for unknown address");
            return Ok(());
        };

        let token = random_token();
        let expires = Utc::now() + Duration::hours(RESET_TTL_HOURS);
        self.users
            .update_one(
                doc! { "_id": user.id },
                doc! { "$set": {
                    "reset_password_token": token.as_str(),
                    "reset_password_expires": bson::DateTime::from_chrono(expires),
                } },
            )
            .await?;

        self.email
            .send_password_reset(&user.email, &user.first_name, &token)
            .await
            .map_err(|e| {
                log::error!("Reset email to {} failed: {}", user.email, e);
                ApiError::internal("Error sending password reset email. Please try again.")
            })
    }

    pub async fn reset_password(&self, input: ResetPasswordRequest) -> Result<(), ApiError> {
        let now = bson::DateTime::now();
        let user = self
            .users
            .find_one(doc! {
                "reset_password_token": input.token.trim(),
                "reset_password_expires": { "$gt": now },
            })
            .await?
            .ok_or_else(|| ApiError::validation("Invalid or expired reset token"))?;

        let password = hash_password(&input.password)?;
        self.users
            .update_one(
                doc! { "_id": user.id },
                doc! {
                    "$set": { "password": password, "updated_at": now },
                    "$unset": { "reset_password_token": "", "reset_password_expires": "" },
                },
            )
            .await?;
        log::info!("Password reset for {}", user.email);
        Ok(())
    }

    pub async fn resend_verification(&self, input: EmailRequest) -> Result<(), ApiError> {
        let email = normalize_email(&input.email);
        let user = self
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        if user.is_email_verified {
            return Err(ApiError::validation("Email is already verified"));
        }

        let token = random_token();
        let expires = Utc::now() + Duration::hours(VERIFICATION_TTL_HOURS);
        self.users
            .update_one(
                doc! { "_id": user.id },
                doc! { "$set": {
                    "email_verification_token": token.as_str(),
                    "email_verification_expires": bson::DateTime::from_chrono(expires),
                } },
            )
            .await?;

        self.email
            .send_email_verification(&user.email, &user.first_name, &token)
            .await
            .map_err(|e| {
                log::error!("Verification email to {} failed: {}", user.email, e);
                ApiError::internal("Error sending verification email. Please try again.")
            })
    }

    pub async fn profile(&self, user_id: &str) -> Result<User, ApiError> {
        let id = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::Unauthorized("Token is not valid".to_string()))?;
        self.users
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(first: &str, last: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn fields(err: ApiError) -> Vec<&'static str> {
        match err {
            ApiError::InvalidFields(errors) => errors.iter().map(|e| e.field).collect(),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("asha.rao@example.co.in"));
        assert!(!is_valid_email("asha@"));
        assert!(!is_valid_email("not an email"));
        assert_eq!(normalize_email("  Asha@Example.COM "), "asha@example.com");
    }

    #[test]
    fn test_registration_accepts_good_input() {
        assert!(validate_registration(&registration("Asha", "Rao", "asha@example.com", "secret1")).is_ok());
    }

    #[test]
    fn test_registration_lists_every_bad_field() {
        let err = validate_registration(&registration("A", "", "nope", "123")).unwrap_err();
        assert_eq!(fields(err), vec!["firstName", "lastName", "email", "password"]);

        let long = "x".repeat(51);
        let err = validate_registration(&registration(&long, "Rao", "a@b.co", "secret1")).unwrap_err();
        assert_eq!(fields(err), vec!["firstName"]);
    }

    #[test]
    fn test_login_requires_password() {
        let err = validate_login(&LoginRequest {
            email: "asha@example.com".to_string(),
            password: String::new(),
        })
        .unwrap_err();
        assert_eq!(fields(err), vec!["password"]);
    }

    #[test]
    fn test_reset_requires_token_and_length() {
        let err = validate_reset(&ResetPasswordRequest {
            token: " ".to_string(),
            password: "abc".to_string(),
        })
        .unwrap_err();
        assert_eq!(fields(err), vec!["token", "password"]);
    }

    #[test]
    fn test_random_tokens() {
        let a = random_token();
        assert_eq!(a.len(), TOKEN_LENGTH);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, random_token());
    }
}
