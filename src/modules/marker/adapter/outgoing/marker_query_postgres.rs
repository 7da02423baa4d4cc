use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::marker::application::domain::entities::{MarkerRecord, OwnerRecord};
use crate::marker::application::ports::outgoing::{MarkerQuery, MarkerQueryError};

#[derive(Debug, FromQueryResult)]
struct MarkerRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    latitude: f64,
    longitude: f64,
    region: String,
    marker_type: String,
    created_at: DateTimeWithTimeZone,
    display_name: String,
    store_name: Option<String>,
    profile_image: Option<String>,
    first_name: String,
    last_name: String,
    show_real_name: bool,
}

impl From<MarkerRow> for MarkerRecord {
    fn from(row: MarkerRow) -> Self {
        MarkerRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            latitude: row.latitude,
            longitude: row.longitude,
            region: row.region,
            marker_type: row.marker_type,
            created_at: row.created_at.to_utc(),
            owner: OwnerRecord {
                display_name: row.display_name,
                store_name: row.store_name,
                profile_image: row.profile_image,
                first_name: row.first_name,
                last_name: row.last_name,
                show_real_name: row.show_real_name,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct MarkerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MarkerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MarkerQuery for MarkerQueryPostgres {
    async fn list_with_owners(&self) -> Result<Vec<MarkerRecord>, MarkerQueryError> {
        // Inner join on user_bios drops owners without a profile row
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                m.id,
                m.name,
                m.description,
                m.latitude,
                m.longitude,
                m.region,
                m.marker_type,
                m.created_at,
                b.display_name,
                b.store_name,
                b.profile_image,
                u.first_name,
                u.last_name,
                b.show_real_name
            FROM user_markers m
            JOIN users u ON u.id = m.user_id
            JOIN user_bios b ON b.user_id = u.id
            WHERE u.is_deleted = false
            ORDER BY m.created_at DESC
            "#,
        );

        let rows = MarkerRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Marker query failed");
                MarkerQueryError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(MarkerRecord::from).collect())
    }
}
