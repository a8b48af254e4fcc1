use gatehouse_core::{HashedPassword, User, UserStore, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email_address: &str) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT email_address, first_name, last_name, hashed_password
                FROM users
                WHERE email_address = $1
            "#,
        )
        .bind(email_address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let hashed_password: String = row
            .try_get("hashed_password")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let user = User::from_parts(
            get_column(&row, "email_address")?,
            get_column(&row, "first_name")?,
            get_column(&row, "last_name")?,
            HashedPassword::from_hash(Secret::from(hashed_password)),
        );

        Ok(Some(user))
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn save(&self, user: User) -> Result<(), UserStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (email_address, first_name, last_name, hashed_password)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.email_address())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.hashed_password().as_ref().expose_secret());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }
}

fn get_column(row: &sqlx::postgres::PgRow, column: &str) -> Result<String, UserStoreError> {
    row.try_get(column)
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
}
