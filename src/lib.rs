pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpFormRelay;
pub use config::{cli::LocalStorage, toml_config::SiteConfig};
pub use crate::core::{
    contact::ContactSubmission, engine::SiteEngine, hover::CardHover, page::PortfolioPage,
};
pub use domain::model::{Portfolio, Profile, Project, SkillTag};
pub use utils::error::{Result, SiteError};
