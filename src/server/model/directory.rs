use serde::Deserialize;

use crate::model::availability::UserProfileDto;

/// Public profile of a coach or client as served by the auth service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

impl UserProfile {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            name: self.name,
            email: self.email,
            image_url: self.image_url,
        }
    }
}
