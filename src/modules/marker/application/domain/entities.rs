use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A marker joined to its owner, as read from the store.
///
/// Carries the owner's real name and privacy flag; never serialized directly.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    pub marker_type: String,
    pub created_at: DateTime<Utc>,
    pub owner: OwnerRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerRecord {
    pub display_name: String,
    pub store_name: Option<String>,
    pub profile_image: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub show_real_name: bool,
}

/// Public owner info. Real name only when that owner opted in.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MarkerOwner {
    #[schema(example = "ToyBox")]
    pub display_name: String,
    pub store_name: Option<String>,
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MarkerWithOwner {
    pub id: Uuid,
    #[schema(example = "Tin robot stall")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = json!(51.5072))]
    pub latitude: f64,
    #[schema(example = json!(-0.1276))]
    pub longitude: f64,
    #[schema(example = "London")]
    pub region: String,
    #[schema(example = "shop")]
    pub marker_type: String,
    pub created_at: DateTime<Utc>,
    pub user: MarkerOwner,
}

impl From<OwnerRecord> for MarkerOwner {
    fn from(owner: OwnerRecord) -> Self {
        let (first_name, last_name) = if owner.show_real_name {
            (Some(owner.first_name), Some(owner.last_name))
        } else {
            (None, None)
        };

        MarkerOwner {
            display_name: owner.display_name,
            store_name: owner.store_name,
            profile_image: owner.profile_image,
            first_name,
            last_name,
        }
    }
}

impl From<MarkerRecord> for MarkerWithOwner {
    fn from(record: MarkerRecord) -> Self {
        MarkerWithOwner {
            id: record.id,
            name: record.name,
            description: record.description,
            latitude: record.latitude,
            longitude: record.longitude,
            region: record.region,
            marker_type: record.marker_type,
            created_at: record.created_at,
            user: record.owner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(show_real_name: bool) -> OwnerRecord {
        OwnerRecord {
            display_name: "ToyBox".to_string(),
            store_name: Some("ToyBox Vintage".to_string()),
            profile_image: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            show_real_name,
        }
    }

    #[test]
    fn opted_in_owner_shows_real_name() {
        let public = MarkerOwner::from(owner(true));

        assert_eq!(public.first_name.as_deref(), Some("Ada"));
        assert_eq!(public.last_name.as_deref(), Some("Lovelace"));
    }

    #[test]
    fn opted_out_owner_hides_real_name() {
        let public = MarkerOwner::from(owner(false));

        assert_eq!(public.first_name, None);
        assert_eq!(public.last_name, None);
        assert_eq!(public.display_name, "ToyBox");

        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("first_name").is_none());
        assert!(json.get("last_name").is_none());
    }
}
