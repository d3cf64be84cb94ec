use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ApiError;
use crate::models::TodoItemFields;

/// Maximum number of characters in a title or description
pub const MAX_FIELD_LENGTH: usize = 255;

/// Data transfer object for creating or replacing a todo item
///
/// Every field is optional at the decoding level so that a missing title
/// is reported as "Title is empty" rather than as a decode failure.
/// Unknown fields, including any client-supplied `id`, are ignored.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoItemDto {
    /// The title of the item, required to be non-empty
    pub title: Option<String>,

    /// Optional free-form details
    pub description: Option<String>,

    /// Completion flag, `false` when absent
    pub completed: Option<bool>,
}

impl TodoItemDto {
    /// Decodes a raw request body as JSON
    ///
    /// ### Errors
    ///
    /// Returns `ApiError::BadArguments` for anything that is not a JSON
    /// object with correctly typed fields, including an empty body.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(|err| {
            warn!("Error decoding JSON body: {}", err);
            ApiError::BadArguments
        })
    }

    /// Validates the DTO and turns it into the fields the store persists
    ///
    /// Checks run in a fixed order: empty title, title length, description
    /// length. Absent optional fields take their defaults.
    pub fn into_fields(self) -> Result<TodoItemFields, ApiError> {
        let title = self.title.unwrap_or_default();
        if title.is_empty() {
            warn!("Title is empty");
            return Err(ApiError::EmptyTitle);
        }
        if title.chars().count() > MAX_FIELD_LENGTH {
            return Err(ApiError::TitleTooLong);
        }

        let description = self.description.unwrap_or_default();
        if description.chars().count() > MAX_FIELD_LENGTH {
            return Err(ApiError::DescriptionTooLong);
        }

        Ok(TodoItemFields {
            title,
            description,
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// Response body for the health check endpoint
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthResponse {
    pub alive: bool,
}

/// Response body for operations that return no entity
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}
