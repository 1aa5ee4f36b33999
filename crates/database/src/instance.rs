//! Instance lookup.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::Instance;

/// Find an instance by its exact display name.
///
/// Returns `None` when no instance matches. The name column carries no
/// uniqueness constraint upstream; when duplicates exist the first row
/// the store returns wins, with no defined tie-break.
pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Instance>> {
    let instance = sqlx::query_as::<_, Instance>(
        r#"
        SELECT id, "ownerJid" AS owner_jid, name
        FROM "Instance"
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(instance)
}
