use crate::domain::model::Dog;
use crate::domain::profiles::ActiveProfiles;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_profile_label, validate_profile_list, Validate};
use serde::Deserialize;
use std::path::Path;

/// Environment variable that overrides `[profiles] active`.
pub const PROFILES_ENV_VAR: &str = "DOG_PROFILES_ACTIVE";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profiles: ProfilesConfig,
    /// Seed values for the registered dog; absent means `Dog::default()`.
    pub dog: Option<Dog>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    pub active: Vec<String>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| AppError::FileReadError {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::TomlParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${DOG_NAME})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("env placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn file_profiles(&self) -> ActiveProfiles {
        ActiveProfiles::new(&self.profiles.active)
    }

    /// Active profiles with precedence: CLI flag, then `DOG_PROFILES_ACTIVE`,
    /// then the file. Only the list actually used is validated.
    pub fn resolve_profiles(&self, cli_override: Option<&str>) -> Result<ActiveProfiles> {
        let from_env = std::env::var(PROFILES_ENV_VAR).ok();
        self.resolve_profiles_from(cli_override, from_env.as_deref())
    }

    pub fn resolve_profiles_from(
        &self,
        cli_override: Option<&str>,
        env_value: Option<&str>,
    ) -> Result<ActiveProfiles> {
        if let Some(list) = cli_override {
            validate_profile_list("profiles", list)?;
            tracing::debug!(profiles = list, "profiles from command line");
            return Ok(ActiveProfiles::parse(list));
        }
        if let Some(list) = env_value {
            validate_profile_list(PROFILES_ENV_VAR, list)?;
            tracing::debug!(profiles = list, "profiles from {}", PROFILES_ENV_VAR);
            return Ok(ActiveProfiles::parse(list));
        }
        self.validate()?;
        Ok(self.file_profiles())
    }

    pub fn seed_dog(&self) -> Dog {
        self.dog.clone().unwrap_or_default()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        for label in &self.profiles.active {
            validate_profile_label("profiles.active", label)?;
        }
        Ok(())
    }
}
