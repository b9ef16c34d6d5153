use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Canonical proficiency levels. The legacy `In Progress`/`Completed` pair
/// seen in one early schema is not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_level", rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub created_at: OffsetDateTime,
}

impl Skill {
    /// List the caller's skills, optionally narrowed by a name substring
    /// and/or a level. Every query here filters on `user_id`, so rows owned
    /// by other users are invisible.
    pub async fn list_by_user(
        db: &PgPool,
        user_id: Uuid,
        q: Option<&str>,
        level: Option<SkillLevel>,
    ) -> anyhow::Result<Vec<Skill>> {
        let rows = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, user_id, name, level, created_at
            FROM skills
            WHERE user_id = $1
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
              AND ($3::skill_level IS NULL OR level = $3)
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(q)
        .bind(level)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        level: SkillLevel,
    ) -> anyhow::Result<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (user_id, name, level)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, level, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(level)
        .fetch_one(db)
        .await?;
        Ok(skill)
    }

    /// Patch name and/or level. Returns `None` when no row matches both the
    /// id and the owner, so "absent" and "not yours" are indistinguishable.
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        name: Option<&str>,
        level: Option<SkillLevel>,
    ) -> anyhow::Result<Option<Skill>> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET name = COALESCE($3::text, name),
                level = COALESCE($4::skill_level, level)
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, level, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .bind(level)
        .fetch_optional(db)
        .await?;
        Ok(skill)
    }

    /// Delete one owned row. `false` means nothing matched; repeated deletes
    /// of the same id are not idempotent.
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM skills
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
