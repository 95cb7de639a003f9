pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Render a static portfolio page and deliver its contact form")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML site configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write index.html and the bundled assets to the output directory
    Render(RenderArgs),
    /// Post a contact message to the form relay
    Submit(SubmitArgs),
    /// Print the active portfolio data as JSON
    Inspect,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long)]
    pub assets_dir: Option<String>,

    /// Year shown in the footer, defaults to the current year
    #[arg(long)]
    pub year: Option<i32>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub message: String,

    /// Override the configured form relay endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Load the site config (file or built-in) and apply command line overrides.
    pub fn site_config(&self) -> crate::Result<toml_config::SiteConfig> {
        let mut site = match &self.config {
            Some(path) => toml_config::SiteConfig::from_file(path)?,
            None => toml_config::SiteConfig::default(),
        };

        match &self.command {
            Command::Render(args) => {
                if let Some(output_path) = &args.output_path {
                    site.site.output_path = output_path.clone();
                }
                if let Some(assets_dir) = &args.assets_dir {
                    site.site.assets_dir = assets_dir.clone();
                }
            }
            Command::Submit(args) => {
                if let Some(endpoint) = &args.endpoint {
                    site.contact.endpoint = endpoint.clone();
                }
            }
            Command::Inspect => {}
        }

        Ok(site)
    }
}
