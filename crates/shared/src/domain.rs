use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(MazeId);

/// Canonical `<letter><row>` key of a grid cell, e.g. `B12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(String);

impl PointId {
    /// Wraps an identifier that is already in canonical form.
    pub fn from_canonical(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PointId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl GridSize {
    pub fn new(columns: u32, rows: u32) -> Result<Self, ParseError> {
        if columns == 0 || rows == 0 {
            return Err(ParseError::NonPositiveGrid { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

impl FromStr for GridSize {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let (columns, rows) = trimmed
            .split_once('x')
            .ok_or_else(|| ParseError::MalformedGrid(raw.to_string()))?;
        let parse_side = |side: &str| {
            if side.is_empty() || !side.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::MalformedGrid(raw.to_string()));
            }
            side.parse::<u32>()
                .map_err(|_| ParseError::MalformedGrid(raw.to_string()))
        };
        Self::new(parse_side(columns)?, parse_side(rows)?)
    }
}

impl TryFrom<String> for GridSize {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GridSize> for String {
    fn from(value: GridSize) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    Min,
    Max,
}

impl PathKind {
    /// Value of the `steps` query parameter.
    pub fn steps(self) -> &'static str {
        match self {
            PathKind::Min => "min",
            PathKind::Max => "max",
        }
    }

    pub fn other(self) -> Self {
        match self {
            PathKind::Min => PathKind::Max,
            PathKind::Max => PathKind::Min,
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.steps())
    }
}

impl FromStr for PathKind {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(PathKind::Min),
            "max" => Ok(PathKind::Max),
            other => Err(ParseError::UnknownPathKind(other.to_string())),
        }
    }
}

/// Session token sent as the `User-Token` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserToken(pub Uuid);

impl fmt::Display for UserToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserToken {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw.trim())
            .map(UserToken)
            .map_err(|_| ParseError::InvalidUserToken(raw.to_string()))
    }
}
