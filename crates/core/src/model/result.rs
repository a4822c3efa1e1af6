use serde::{Deserialize, Serialize};

use crate::model::TraitId;

/// Static payload shown when a trait wins the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(rename = "trait")]
    pub trait_id: TraitId,
    pub label: String,
    pub description: String,
    pub spot_name: String,
    pub spot_reason: String,
    #[serde(default)]
    pub image_url: String,
}

impl ResultRecord {
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }
}
