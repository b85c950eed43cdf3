use std::collections::HashMap;

use anyhow::Result;
use models_bizdesk::user::UserRef;
use sqlx::PgPool;

#[derive(Debug, sqlx::FromRow)]
struct UserProfileRow {
    id: String,
    name: String,
    email: String,
    avatar: Option<String>,
    role: Option<String>,
}

/// Batch-resolves user ids to their profile projections. Ids without a
/// profile row are simply absent from the result, which callers surface as an
/// unresolved (null) reference.
#[tracing::instrument(skip(pool, ids))]
pub async fn get_refs(pool: &PgPool, ids: &[String]) -> Result<HashMap<String, UserRef>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, UserProfileRow>(
        "SELECT id, name, email, avatar, role FROM user_profiles WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            (
                row.id.clone(),
                UserRef {
                    id: row.id,
                    name: row.name,
                    email: row.email,
                    avatar: row.avatar,
                    role: row.role,
                },
            )
        })
        .collect())
}

/// Resolves a single optional user id
pub async fn get_ref(pool: &PgPool, id: Option<&str>) -> Result<Option<UserRef>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let mut refs = get_refs(pool, &[id.to_string()]).await?;
    Ok(refs.remove(id))
}
