use async_trait::async_trait;

use crate::marker::application::domain::entities::MarkerWithOwner;
use crate::marker::application::ports::{
    incoming::use_cases::{GetMarkersError, GetMarkersUseCase},
    outgoing::MarkerQuery,
};

#[derive(Debug, Clone)]
pub struct GetMarkersService<Q>
where
    Q: MarkerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetMarkersService<Q>
where
    Q: MarkerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMarkersUseCase for GetMarkersService<Q>
where
    Q: MarkerQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<MarkerWithOwner>, GetMarkersError> {
        let records = self
            .query
            .list_with_owners()
            .await
            .map_err(|e| GetMarkersError::QueryError(e.to_string()))?;

        // Privacy is decided per owner, row by row
        Ok(records.into_iter().map(MarkerWithOwner::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    use crate::marker::application::domain::entities::{MarkerRecord, OwnerRecord};
    use crate::marker::application::ports::outgoing::MarkerQueryError;

    mock! {
        pub MarkerQueryMock {}
        #[async_trait]
        impl MarkerQuery for MarkerQueryMock {
            async fn list_with_owners(&self) -> Result<Vec<MarkerRecord>, MarkerQueryError>;
        }
    }

    fn record(display_name: &str, first: &str, show_real_name: bool) -> MarkerRecord {
        MarkerRecord {
            id: Uuid::new_v4(),
            name: format!("{} stall", display_name),
            description: None,
            latitude: 51.5,
            longitude: -0.12,
            region: "London".to_string(),
            marker_type: "shop".to_string(),
            created_at: Utc::now(),
            owner: OwnerRecord {
                display_name: display_name.to_string(),
                store_name: None,
                profile_image: None,
                first_name: first.to_string(),
                last_name: "Smith".to_string(),
                show_real_name,
            },
        }
    }

    #[tokio::test]
    async fn mixed_privacy_is_applied_per_owner() {
        let mut query = MockMarkerQueryMock::new();
        query.expect_list_with_owners().times(1).returning(|| {
            Ok(vec![
                record("Open", "Olive", true),
                record("Private", "Percy", false),
                record("AlsoOpen", "Alma", true),
            ])
        });

        let markers = GetMarkersService::new(query).execute().await.unwrap();

        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].user.first_name.as_deref(), Some("Olive"));
        assert_eq!(markers[1].user.first_name, None);
        assert_eq!(markers[1].user.last_name, None);
        assert_eq!(markers[1].user.display_name, "Private");
        assert_eq!(markers[2].user.first_name.as_deref(), Some("Alma"));
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let mut query = MockMarkerQueryMock::new();
        query
            .expect_list_with_owners()
            .returning(|| Err(MarkerQueryError::DatabaseError("down".to_string())));

        let result = GetMarkersService::new(query).execute().await;

        assert!(matches!(result, Err(GetMarkersError::QueryError(_))));
    }
}
