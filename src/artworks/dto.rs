use serde::{Deserialize, Serialize};

use super::repo_types::Artwork;

/// Body shared by create and update; update replaces every field at once.
#[derive(Debug, Deserialize)]
pub struct ArtworkBody {
    pub image: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateArtworkResponse {
    pub message: String,
    pub artwork: Artwork,
}

#[derive(Debug, Serialize)]
pub struct DeleteArtworkResponse {
    pub message: String,
}
