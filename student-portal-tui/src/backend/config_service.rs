//! 配置文件读取

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use student_portal_core::DEFAULT_API_URL;

use crate::view::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 学生集合的 REST 地址
    pub api_url: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme: Theme::Dark,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// JSON 文件配置服务
pub struct FileConfigService {
    path: Option<PathBuf>,
}

impl FileConfigService {
    /// 指定配置文件；None 时使用平台配置目录下的默认位置
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.or_else(default_config_path),
        }
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig> {
        match &self.path {
            Some(path) => load_from(path),
            None => {
                log::debug!("No config directory available, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

/// 默认配置文件位置：<config_dir>/student-portal/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("student-portal").join("config.json"))
}

/// 读取配置文件；文件不存在时返回默认配置
fn load_from(path: &Path) -> Result<AppConfig> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read config file {}", path.display()))
        }
    };

    serde_json::from_str(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))
}
