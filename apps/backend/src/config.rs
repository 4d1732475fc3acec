//! Service configuration from the environment

use anyhow::{bail, Context};
use exam_pdf::{LayoutConfig, PageSize};

/// Backend settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub page_size: PageSize,
    pub include_title: bool,
    pub max_pages: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            page_size: PageSize::a4(),
            include_title: true,
            max_pages: LayoutConfig::default().max_pages,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `EXPORT_PAGE_SIZE`, `EXPORT_INCLUDE_TITLE` and
    /// `EXPORT_MAX_PAGES`, falling back to defaults for unset variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT: {}", port))?;
        }
        if let Some(size) = lookup("EXPORT_PAGE_SIZE") {
            config.page_size = size
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid EXPORT_PAGE_SIZE: {}", e))?;
        }
        if let Some(flag) = lookup("EXPORT_INCLUDE_TITLE") {
            config.include_title = parse_bool(&flag)
                .with_context(|| format!("invalid EXPORT_INCLUDE_TITLE: {}", flag))?;
        }
        if let Some(pages) = lookup("EXPORT_MAX_PAGES") {
            config.max_pages = pages
                .trim()
                .parse()
                .with_context(|| format!("invalid EXPORT_MAX_PAGES: {}", pages))?;
            if config.max_pages == 0 {
                bail!("EXPORT_MAX_PAGES must be at least 1");
            }
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Layout settings for exports.
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            page_size: self.page_size,
            include_title: self.include_title,
            max_pages: self.max_pages,
            ..LayoutConfig::default()
        }
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("expected true or false, got {}", other),
    }
}
