use std::{collections::HashMap, fs, path::Path};

use anyhow::{anyhow, Context};
use maze_core::geometry;
use shared::domain::{GridSize, UserToken};
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "maze.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server_url: String,
    pub user_token: Option<String>,
    pub user_id: Option<String>,
    pub default_grid_size: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            user_token: None,
            user_id: None,
            default_grid_size: "10x10".into(),
        }
    }
}

/// Defaults, then `path` if readable, then the environment.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, &file_cfg),
            Err(err) => tracing::warn!(path = %path.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("server_url") {
        settings.server_url = v.clone();
    }
    if let Some(v) = file_cfg.get("user_token") {
        settings.user_token = Some(v.clone());
    }
    if let Some(v) = file_cfg.get("user_id") {
        settings.user_id = Some(v.clone());
    }
    if let Some(v) = file_cfg.get("default_grid_size") {
        settings.default_grid_size = v.clone();
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("MAZE_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = var("MAZE_USER_TOKEN") {
        settings.user_token = Some(v);
    }
    if let Some(v) = var("APP__USER_TOKEN") {
        settings.user_token = Some(v);
    }

    if let Some(v) = var("MAZE_USER_ID") {
        settings.user_id = Some(v);
    }
    if let Some(v) = var("APP__USER_ID") {
        settings.user_id = Some(v);
    }

    if let Some(v) = var("APP__DEFAULT_GRID_SIZE") {
        settings.default_grid_size = v;
    }
}

pub fn parse_server_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid server url {raw:?}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("server url must be http or https, got {other}://")),
    }
}

pub fn parse_user_token(raw: Option<&str>) -> anyhow::Result<Option<UserToken>> {
    raw.filter(|token| !token.trim().is_empty())
        .map(|token| token.parse::<UserToken>().map_err(anyhow::Error::from))
        .transpose()
}

pub fn parse_default_grid(raw: &str) -> anyhow::Result<GridSize> {
    let grid = raw
        .parse::<GridSize>()
        .with_context(|| format!("invalid default grid size {raw:?}"))?;
    geometry::check_grid(grid).with_context(|| format!("unsupported default grid size {raw:?}"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
