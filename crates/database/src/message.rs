//! Message queries.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::StoredMessage;

/// List every stored message between an instance and one contact,
/// newest first.
///
/// The counterparty lives inside the JSONB `key` column; the timestamp
/// is cast to bigint so integer-typed upstream schemas decode
/// uniformly.
pub async fn list_for_contact(
    pool: &PgPool,
    instance_id: &str,
    remote_jid: &str,
) -> Result<Vec<StoredMessage>> {
    let rows = sqlx::query_as::<_, StoredMessage>(
        r#"
        SELECT "messageTimestamp"::bigint AS message_timestamp,
               key,
               message,
               "messageType" AS message_type
        FROM "Message"
        WHERE "instanceId" = $1 AND key->>'remoteJid' = $2
        ORDER BY "messageTimestamp" DESC
        "#,
    )
    .bind(instance_id)
    .bind(remote_jid)
    .fetch_all(pool)
    .await?;

    tracing::debug!(
        instance_id,
        remote_jid,
        count = rows.len(),
        "Loaded stored messages"
    );

    Ok(rows)
}
