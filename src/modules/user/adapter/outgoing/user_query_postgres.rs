use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::user_query::{
    ProfileDetail, ProfileSummary, UserDetail, UserQuery, UserQueryError,
};

#[derive(Debug, FromQueryResult)]
struct ProfileSummaryRow {
    display_name: String,
    store_name: Option<String>,
    bio_description: Option<String>,
    profile_image: Option<String>,
}

impl From<ProfileSummaryRow> for ProfileSummary {
    fn from(row: ProfileSummaryRow) -> Self {
        ProfileSummary {
            display_name: row.display_name,
            store_name: row.store_name,
            bio_description: row.bio_description,
            profile_image: row.profile_image,
        }
    }
}

/// Bio columns come from a LEFT JOIN and are all nullable here.
#[derive(Debug, FromQueryResult)]
struct UserDetailRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    created_at: DateTimeWithTimeZone,
    display_name: Option<String>,
    store_name: Option<String>,
    bio_description: Option<String>,
    profile_image: Option<String>,
    show_real_name: Option<bool>,
    updated_at: Option<DateTimeWithTimeZone>,
}

impl From<UserDetailRow> for UserDetail {
    fn from(row: UserDetailRow) -> Self {
        let profile = match (row.display_name, row.updated_at) {
            (Some(display_name), Some(updated_at)) => Some(ProfileDetail {
                display_name,
                store_name: row.store_name,
                bio_description: row.bio_description,
                profile_image: row.profile_image,
                show_real_name: row.show_real_name.unwrap_or(false),
                updated_at: updated_at.to_utc(),
            }),
            _ => None,
        };

        UserDetail {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            created_at: row.created_at.to_utc(),
            profile,
        }
    }
}

/// Escapes LIKE wildcards so the search term is matched literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UserQueryError {
        error!(error = %e, "User query database error");
        UserQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn get_current_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserDetail>, UserQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                u.id,
                u.first_name,
                u.last_name,
                u.email,
                u.created_at,
                b.display_name,
                b.store_name,
                b.bio_description,
                b.profile_image,
                b.show_real_name,
                b.updated_at
            FROM users u
            LEFT JOIN user_bios b ON b.user_id = u.id
            WHERE u.id = $1
              AND u.is_deleted = false
            "#,
            vec![user_id.value().into()],
        );

        let row = UserDetailRow::find_by_statement(stmt)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(row.map(UserDetail::from))
    }

    async fn list_public_summaries(&self) -> Result<Vec<ProfileSummary>, UserQueryError> {
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                b.display_name,
                b.store_name,
                b.bio_description,
                b.profile_image
            FROM user_bios b
            JOIN users u ON u.id = b.user_id
            WHERE u.is_deleted = false
            ORDER BY b.display_name ASC
            "#,
        );

        let rows = ProfileSummaryRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(ProfileSummary::from).collect())
    }

    async fn search_profiles(
        &self,
        term: &str,
        limit: u64,
    ) -> Result<Vec<ProfileSummary>, UserQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                b.display_name,
                b.store_name,
                b.bio_description,
                b.profile_image
            FROM user_bios b
            JOIN users u ON u.id = b.user_id
            WHERE u.is_deleted = false
              AND (
                b.display_name ILIKE $1 ESCAPE '\'
                OR b.store_name ILIKE $1 ESCAPE '\'
              )
            ORDER BY b.display_name ASC
            LIMIT $2
            "#,
            vec![like_pattern(term).into(), (limit as i64).into()],
        );

        let rows = ProfileSummaryRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(ProfileSummary::from).collect())
    }
}
