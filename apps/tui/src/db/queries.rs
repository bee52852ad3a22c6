use sqlx::{query, query_scalar, SqlitePool};

/// Reads the raw value stored under `key`
pub async fn get_value(pool: &SqlitePool, key: &str) -> Result<Option<String>, sqlx::Error> {
    query_scalar("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
}

/// Inserts or replaces the value stored under `key`
pub async fn set_value(pool: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    query(
        "INSERT INTO kv_store (key, value, updated) VALUES (?, ?, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated = excluded.updated",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_value(pool: &SqlitePool, key: &str) -> Result<(), sqlx::Error> {
    query("DELETE FROM kv_store WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(())
}

/// Removes every stored key
pub async fn clear_values(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = query("DELETE FROM kv_store").execute(pool).await?;
    Ok(result.rows_affected())
}

pub async fn count_values(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    query_scalar("SELECT COUNT(*) FROM kv_store")
        .fetch_one(pool)
        .await
}
