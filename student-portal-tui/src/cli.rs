//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

use crate::backend::AppConfig;
use crate::view::theme::Theme;

/// Terminal client for a student records REST service
#[derive(Debug, Parser)]
#[command(name = "student-portal", version, about)]
pub struct Cli {
    /// Base URL of the student collection (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to the JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use the light color theme
    #[arg(long)]
    pub light: bool,
}

impl Cli {
    /// 命令行参数优先于配置文件
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(ref url) = self.api_url {
            config.api_url.clone_from(url);
        }
        if self.light {
            config.theme = Theme::Light;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "student-portal",
            "--api-url",
            "http://localhost:8080/students",
            "--light",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.api_url, "http://localhost:8080/students");
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::try_parse_from(["student-portal"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
