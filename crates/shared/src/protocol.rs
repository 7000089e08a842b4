use serde::{Deserialize, Serialize};

use crate::domain::{GridSize, MazeId, PointId};

/// One element of `GET /maze`, also returned by `GET /maze/{mazeId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeRecord {
    pub maze_id: MazeId,
    pub grid_size: GridSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<PointId>,
    #[serde(default)]
    pub walls: Vec<PointId>,
}

/// Body of `POST /maze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMazeRequest {
    pub entrance: PointId,
    pub grid_size: GridSize,
    pub walls: Vec<PointId>,
}

/// Response of `POST /maze`: either a new id or an explicit rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeCreation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maze_id: Option<MazeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `GET /maze/{mazeId}/solution?steps=min|max`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MazeSolution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PointId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MazeSolution {
    pub fn with_path(path: Vec<PointId>) -> Self {
        Self {
            path: Some(path),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            path: None,
            error: Some(error.into()),
        }
    }
}
