use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Account row in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // bcrypt hash, never exposed in JSON
    pub phone: String,
    pub city: String,
    pub created_at: OffsetDateTime,
}

/// Projection returned by the session endpoint; the password column is
/// not selected at all.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
}

/// Column values for an insert; the password is already hashed.
pub struct NewUser<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub phone: &'a str,
    pub city: &'a str,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password, phone, city, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user row.
    pub async fn create(db: &PgPool, new: NewUser<'_>) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password, phone, city)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email, password, phone, city, created_at
            "#,
        )
        .bind(new.first_name)
        .bind(new.last_name)
        .bind(new.email)
        .bind(new.password)
        .bind(new.phone)
        .bind(new.city)
        .fetch_one(db)
        .await
    }
}

impl UserProfile {
    /// Public profile for an email, if the account exists.
    pub async fn find_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, first_name, last_name, email, city, phone
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }
}
