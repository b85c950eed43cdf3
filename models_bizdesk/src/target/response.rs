use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Target;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ListTargetsResponse {
    pub targets: Vec<Target>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct GetTargetResponse {
    pub target: Target,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TargetMutatedResponse {
    pub message: String,
    pub target: Target,
}
