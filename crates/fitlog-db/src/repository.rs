use crate::{
    models::{ExerciseRecord, UserRecord},
    Error, Result,
};
use fitlog_core::{Exercise, LogQuery, User};
use sqlx::{postgres::PgPoolOptions, Pool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct Database {
    pool: Pool<Postgres>,
}

impl Database {
    /// Create new database connection
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id VARCHAR(64) PRIMARY KEY,
                username TEXT NOT NULL,
                exercise_count INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // user_id is a weak reference: inserts are not checked against users
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS exercises (
                id SERIAL PRIMARY KEY,
                user_id VARCHAR(64) NOT NULL,
                description TEXT NOT NULL,
                duration INTEGER NOT NULL,
                date DATE NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_user_id ON exercises(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // ========================================================================
    // User Directory
    // ========================================================================

    /// Save a new user
    pub async fn create_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, exercise_count)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(user.exercise_count)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get user by ID
    pub async fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let records = sqlx::query_as::<_, UserRecord>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Increment a user's exercise count by one
    pub async fn increment_exercise_count(&self, user_id: &str) -> Result<()> {
        let result =
            sqlx::query("UPDATE users SET exercise_count = exercise_count + 1 WHERE id = $1")
                .bind(user_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::UserNotFound(user_id.to_string()));
        }

        Ok(())
    }

    // ========================================================================
    // Exercise Ledger
    // ========================================================================

    /// Insert an exercise; the user reference is not validated
    pub async fn insert_exercise(&self, exercise: &Exercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&exercise.user_id)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Fetch a user's exercises matching the query filter, in insertion order
    pub async fn fetch_log(&self, query: &LogQuery) -> Result<Vec<ExerciseRecord>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM exercises WHERE user_id = ");
        builder.push_bind(&query.user_id);

        if let Some(from) = query.from {
            builder.push(" AND date >= ").push_bind(from);
        }
        if let Some(to) = query.to {
            builder.push(" AND date <= ").push_bind(to);
        }

        builder.push(" ORDER BY id");

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        let records = builder
            .build_query_as::<ExerciseRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}
