use crate::core::contact::DEFAULT_FORM_ENDPOINT;
use crate::core::{ConfigProvider, Portfolio};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "./dist";
pub const DEFAULT_ASSETS_DIR: &str = "./assets";

/// Site configuration. Every section is optional; what is left out falls
/// back to the built-in portfolio and defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub contact: ContactSection,
    #[serde(default)]
    pub portfolio: Portfolio,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSection {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_assets_dir() -> String {
    DEFAULT_ASSETS_DIR.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_FORM_ENDPOINT.to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        // 明確指定的設定檔卻沒有內容，多半是路徑指錯
        if content.trim().is_empty() {
            return Err(SiteError::MissingConfigError {
                field: format!("contents of {}", path.as_ref().display()),
            });
        }
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FORM_ENDPOINT})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("contact.endpoint", &self.contact.endpoint)?;
        validation::validate_path("site.output_path", &self.site.output_path)?;
        validation::validate_path("site.assets_dir", &self.site.assets_dir)?;

        let profile = &self.portfolio.profile;
        validation::validate_non_empty_string("portfolio.profile.name", &profile.name)?;
        validation::validate_non_empty_string("portfolio.profile.email", &profile.email)?;

        validation::validate_asset_reference("portfolio.profile.avatar", &profile.avatar)?;
        validation::validate_asset_reference("portfolio.profile.resume", &profile.resume)?;

        // 專案連結照原樣輸出，不在這裡檢查格式
        for project in &self.portfolio.projects {
            validation::validate_non_empty_string("portfolio.projects.id", &project.id)?;
            validation::validate_asset_reference("portfolio.projects.image", &project.image)?;
        }
        validation::validate_unique_project_ids(&self.portfolio.projects)?;

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    fn output_path(&self) -> &str {
        &self.site.output_path
    }

    fn assets_dir(&self) -> &str {
        &self.site.assets_dir
    }

    fn form_endpoint(&self) -> &str {
        &self.contact.endpoint
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_builtin_portfolio() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
        assert_eq!(config.form_endpoint(), DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.portfolio().profile.name, "Muhammed Shameem P");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_portfolio() {
        let toml_content = r#"
[site]
output_path = "./public"

[contact]
endpoint = "https://relay.example.com/f/abc"

[portfolio]
skills = ["Rust", "SQL"]

[portfolio.profile]
name = "Jane Doe"
role = "Engineer"
tagline = "Ships things"
location = "Lisbon"
email = "jane@example.com"
linkedin = "https://www.linkedin.com/in/jane"
github = "https://github.com/jane"
resume = "/jane.pdf"
resume_filename = "jane.pdf"
avatar = "image/jane.jpg"
availability = "Open to work"

[[portfolio.projects]]
id = "one"
title = "One"
desc = "First"
stack = ["Rust"]
image = "image/one.png"
github = "https://github.com/jane/one"
live = "one.example.com"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "./public");
        assert_eq!(config.assets_dir(), DEFAULT_ASSETS_DIR);
        assert_eq!(config.form_endpoint(), "https://relay.example.com/f/abc");
        assert_eq!(config.portfolio.skills.len(), 2);
        assert_eq!(config.portfolio.projects[0].description, "First");
        assert_eq!(config.portfolio.projects[0].live, "one.example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_ENDPOINT", "https://relay.test/f/xyz");

        let toml_content = r#"
[contact]
endpoint = "${PORTFOLIO_TEST_ENDPOINT}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.contact.endpoint, "https://relay.test/f/xyz");

        std::env::remove_var("PORTFOLIO_TEST_ENDPOINT");
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config = SiteConfig::from_toml_str("[contact]\nendpoint = \"not-a-url\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_project_ids_fail_validation() {
        let mut config = SiteConfig::default();
        let duplicate = config.portfolio.projects[1].clone();
        config.portfolio.projects.push(duplicate);

        match config.validate() {
            Err(SiteError::ValidationError { message }) => assert!(message.contains("amazon-clone")),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\nassets_dir = \"./static\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.assets_dir(), "./static");
        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
    }

    #[test]
    fn test_asset_reference_outside_site_root_fails_validation() {
        let mut config = SiteConfig::default();
        config.portfolio.projects[0].image = "../shared/a.png".to_string();

        match config.validate() {
            Err(SiteError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "portfolio.projects.image");
                assert_eq!(value, "../shared/a.png");
            }
            other => panic!("expected invalid asset path, got {:?}", other),
        }

        let mut config = SiteConfig::default();
        config.portfolio.profile.resume = "/../secret.docx".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_config_file_is_missing_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"\n  \n").unwrap();

        match SiteConfig::from_file(temp_file.path()) {
            Err(SiteError::MissingConfigError { field }) => assert!(field.starts_with("contents of")),
            other => panic!("expected missing config, got {:?}", other),
        }
    }
}
