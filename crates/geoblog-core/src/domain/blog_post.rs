use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// A user-authored note attached to a location.
///
/// `location_id` is a soft reference: it is stored and matched as an opaque
/// string and never checked against the stored locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub location_id: String,
    pub user: String,
    pub date: String,
    pub time: String,
    pub text: String,
}

impl BlogPost {
    /// Create a new blog post. Every field is required and must be non-empty.
    pub fn new(
        location_id: String,
        user: String,
        date: String,
        time: String,
        text: String,
    ) -> Result<Self, DomainError> {
        let empty: Vec<&str> = [
            ("location_id", &location_id),
            ("user", &user),
            ("date", &date),
            ("time", &time),
            ("text", &text),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !empty.is_empty() {
            return Err(DomainError::Validation(format!(
                "required fields must not be empty: {}",
                empty.join(", ")
            )));
        }

        Ok(Self {
            id: Uuid::now_v7(),
            location_id,
            user,
            date,
            time,
            text,
        })
    }
}
