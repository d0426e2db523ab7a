/**
 * User Store
 *
 * Persistence for user profiles. The auth extractor resolves token
 * subjects here, and member/sender listings join against this table.
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::UserProfile;

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
}

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        UserProfile {
            id: row.id,
            username: row.username,
        }
    }
}

/// Insert a user resolved from the identity provider
pub async fn create_user(pool: &SqlitePool, username: &str) -> Result<UserProfile, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO users (id, username, created_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(UserProfile {
        id,
        username: username.to_string(),
    })
}

/// Look up a user by id
pub async fn get_user_by_id(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(UserProfile::from))
}
