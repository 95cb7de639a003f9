use crate::domain::model::Project;
use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;
use std::path::{Component, Path};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 專案 id 是渲染時的 key，重複會讓卡片身份錯亂
pub fn validate_unique_project_ids(projects: &[Project]) -> Result<()> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id.as_str()) {
            return Err(SiteError::ValidationError {
                message: format!("Duplicate project id: {}", project.id),
            });
        }
    }
    Ok(())
}

/// Absolute http(s) link. Anything else is kept as written but reported.
pub fn is_absolute_http_url(link: &str) -> bool {
    Url::parse(link)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Relative path that stays under the directory it is joined onto:
/// no `..`, no root, no drive prefix.
pub fn is_contained_path(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Local asset references may start with `/` (site root) but must not
/// climb out of it.
pub fn validate_asset_reference(field_name: &str, reference: &str) -> Result<()> {
    if reference.is_empty() || is_absolute_http_url(reference) || reference.starts_with("//") {
        return Ok(());
    }
    if !is_contained_path(reference.trim_start_matches('/')) {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: reference.to_string(),
            reason: "Asset path must stay inside the site root".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("contact.endpoint", "https://formspree.io/f/mrbaynvy").is_ok());
        assert!(validate_url("contact.endpoint", "http://localhost:8080/f").is_ok());
        assert!(validate_url("contact.endpoint", "").is_err());
        assert!(validate_url("contact.endpoint", "invalid-url").is_err());
        assert!(validate_url("contact.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_unique_project_ids() {
        let mut projects = content::projects();
        assert!(validate_unique_project_ids(&projects).is_ok());

        let mut duplicate = projects[0].clone();
        duplicate.title = "Another".to_string();
        projects.push(duplicate);
        let err = validate_unique_project_ids(&projects).unwrap_err();
        assert!(err.to_string().contains("nft-minting-app"));
    }

    #[test]
    fn test_schemeless_link_is_not_absolute() {
        assert!(is_absolute_http_url("https://amazon-clone-nine-roan.vercel.app"));
        assert!(!is_absolute_http_url("web3-token-farm-ntmg.vercel.app"));
        assert!(!is_absolute_http_url("/shameem.docx"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("profile.name", "Jane").is_ok());
        assert!(validate_non_empty_string("profile.name", "   ").is_err());
    }

    #[test]
    fn test_is_contained_path() {
        assert!(is_contained_path("image/avatar.jpg"));
        assert!(is_contained_path("./shameem.docx"));
        assert!(!is_contained_path("../shared/a.png"));
        assert!(!is_contained_path("image/../../a.png"));
        assert!(!is_contained_path("/etc/passwd"));
        assert!(!is_contained_path(""));
    }

    #[test]
    fn test_validate_asset_reference() {
        assert!(validate_asset_reference("portfolio.profile.resume", "/shameem.docx").is_ok());
        assert!(validate_asset_reference("portfolio.projects.image", "https://cdn.example.com/a.png").is_ok());
        assert!(validate_asset_reference("portfolio.projects.image", "../shared/a.png").is_err());
        assert!(validate_asset_reference("portfolio.profile.avatar", "/../a.jpg").is_err());
    }
}
