use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_profile_list, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "dog-profile")]
#[command(about = "Resolve active profiles and report which components get registered")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Comma-separated active profiles; overrides env and file")]
    pub profiles: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(list) = &self.profiles {
            validate_profile_list("profiles", list)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "dog-profile",
            "--config",
            "app.toml",
            "--profiles",
            "test,dev",
            "--verbose",
        ]);
        assert_eq!(config.config.as_deref(), Some("app.toml"));
        assert_eq!(config.profiles.as_deref(), Some("test,dev"));
        assert!(config.verbose);
        assert!(!config.log_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_flags() {
        let config = CliConfig::parse_from(["dog-profile"]);
        assert!(config.config.is_none());
        assert!(config.profiles.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_profile_list() {
        let config = CliConfig::parse_from(["dog-profile", "--profiles", "test,my dev"]);
        assert!(config.validate().is_err());
    }
}
