use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Project, ProjectDetail};

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ListProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct GetProjectResponse {
    pub project: ProjectDetail,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ProjectMutatedResponse {
    pub message: String,
    pub project: ProjectDetail,
}
