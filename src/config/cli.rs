use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "neighborhood")]
#[command(about = "Lists places from the Neighborhood directory API")]
pub struct CliConfig {
    /// Base URL of the places API.
    #[arg(long, default_value = "https://byteboard.dev")]
    pub base_url: String,

    /// Only show places whose name contains this text (case-insensitive).
    #[arg(long)]
    pub filter: Option<String>,

    /// Download each place's image into this directory as {id}.png.
    #[arg(long)]
    pub save_images: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;

        if let Some(dir) = &self.save_images {
            validate_path("save_images", dir)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> CliConfig {
        CliConfig {
            base_url: base_url.to_string(),
            filter: None,
            save_images: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(config("https://byteboard.dev").validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(config("not a url").validate().is_err());
        assert!(config("ftp://example.com").validate().is_err());
    }

    #[test]
    fn test_empty_save_images_dir_is_rejected() {
        let mut cfg = config("https://byteboard.dev");
        cfg.save_images = Some(String::new());
        assert!(cfg.validate().is_err());
    }
}
