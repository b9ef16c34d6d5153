use serde::{Deserialize, Serialize};

use crate::skills::repo::SkillLevel;

/// Request body for creating a skill.
#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub level: SkillLevel,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateSkillRequest {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

/// Optional list filters: `q` matches the name case-insensitively,
/// `level` narrows to one proficiency level.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}
