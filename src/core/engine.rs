use crate::core::page::PortfolioPage;
use crate::core::{ConfigProvider, RenderedPage, Storage};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{is_absolute_http_url, is_contained_path};
use std::path::Path;

pub const INDEX_FILE: &str = "index.html";

/// Renders the page and lays it out in the output storage together with the
/// local assets it references.
pub struct SiteEngine<S: Storage, C: ConfigProvider> {
    output: S,
    assets: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SiteEngine<S, C> {
    pub fn new(output: S, assets: S, config: C) -> Self {
        Self {
            output,
            assets,
            config,
        }
    }

    pub fn render_html(&self, year: i32) -> String {
        PortfolioPage::new(self.config.portfolio(), self.config.form_endpoint(), year).render()
    }

    pub async fn build(&self, year: i32) -> Result<RenderedPage> {
        let portfolio = self.config.portfolio();
        tracing::info!(
            "🛠️ Rendering portfolio for {} ({} skills, {} projects)",
            portfolio.profile.name,
            portfolio.skills.len(),
            portfolio.projects.len()
        );

        for project in &portfolio.projects {
            if !is_absolute_http_url(&project.live) {
                tracing::debug!(
                    "Project '{}' live link '{}' is not an absolute URL, keeping it as written",
                    project.id,
                    project.live
                );
            }
        }

        let html = self.render_html(year);
        self.output.write_file(INDEX_FILE, html.as_bytes()).await?;
        tracing::debug!("Wrote {} ({} bytes)", INDEX_FILE, html.len());

        let mut assets_copied = Vec::new();
        let mut assets_missing = Vec::new();

        for reference in portfolio.asset_paths() {
            let Some(relative) = local_asset_path(reference) else {
                if reference.is_empty() || is_remote_reference(reference) {
                    tracing::debug!("Skipping non-local asset '{}'", reference);
                } else {
                    tracing::warn!("⚠️ Asset '{}' points outside the site root, not copying it", reference);
                }
                continue;
            };

            match self.assets.read_file(relative).await {
                Ok(bytes) => {
                    self.output.write_file(relative, &bytes).await?;
                    assets_copied.push(relative.to_string());
                }
                // 圖片壞掉交給瀏覽器處理，不中斷輸出
                Err(SiteError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::warn!(
                        "⚠️ Asset '{}' not found under {}, page will reference it anyway",
                        relative,
                        self.config.assets_dir()
                    );
                    assets_missing.push(relative.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        let output_path = Path::new(self.config.output_path())
            .join(INDEX_FILE)
            .to_string_lossy()
            .into_owned();

        tracing::info!(
            "📁 Page written to {} ({} assets copied, {} missing)",
            output_path,
            assets_copied.len(),
            assets_missing.len()
        );

        Ok(RenderedPage {
            output_path,
            bytes_written: html.len(),
            assets_copied,
            assets_missing,
        })
    }
}

fn is_remote_reference(reference: &str) -> bool {
    is_absolute_http_url(reference) || reference.starts_with("//")
}

/// Site-relative path for an asset reference. `None` for remote references
/// and for anything that would leave the site root.
fn local_asset_path(reference: &str) -> Option<&str> {
    if reference.is_empty() || is_remote_reference(reference) {
        return None;
    }
    let relative = reference.trim_start_matches('/');
    is_contained_path(relative).then_some(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_asset_path() {
        assert_eq!(local_asset_path("/shameem.docx"), Some("shameem.docx"));
        assert_eq!(local_asset_path("image/avatar.jpg"), Some("image/avatar.jpg"));
        assert_eq!(local_asset_path("https://cdn.example.com/a.png"), None);
        assert_eq!(local_asset_path("//cdn.example.com/a.png"), None);
        assert_eq!(local_asset_path(""), None);
    }

    #[test]
    fn test_local_asset_path_rejects_parent_components() {
        assert_eq!(local_asset_path("../x.png"), None);
        assert_eq!(local_asset_path("/../x.png"), None);
        assert_eq!(local_asset_path("image/../../x.png"), None);
        assert_eq!(local_asset_path("./image/x.png"), Some("./image/x.png"));
    }
}
