//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional so that absent fields reach the handler and
//! can be reported together, instead of failing inside the JSON extractor.

use serde::{Deserialize, Serialize};

/// Request to create a location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLocationRequest {
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

impl CreateLocationRequest {
    /// Names of required fields absent from the request.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.lat.is_none() {
            missing.push("lat");
        }
        if self.long.is_none() {
            missing.push("long");
        }
        missing
    }
}

/// Request to create a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub location_id: Option<String>,
    pub user: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub text: Option<String>,
}

impl CreateBlogPostRequest {
    /// Names of required fields absent from the request. An empty string
    /// counts as absent.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("location_id", &self.location_id),
            ("user", &self.user),
            ("date", &self.date),
            ("time", &self.time),
            ("text", &self.text),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(field, _)| field)
        .collect()
    }
}

/// A stored location as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResponse {
    pub id: String,
    pub lat: f64,
    pub long: f64,
}

/// A stored blog post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub location_id: String,
    pub user: String,
    pub date: String,
    pub time: String,
    pub text: String,
}
