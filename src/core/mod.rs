pub mod contact;
pub mod engine;
pub mod hover;
pub mod icons;
pub mod page;
pub mod style;

pub use crate::domain::model::{Portfolio, Profile, Project, RenderedPage, SkillTag};
pub use crate::domain::ports::{ConfigProvider, FormRelay, Storage};
pub use crate::utils::error::Result;
