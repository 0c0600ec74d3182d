pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use app::build_context;
pub use crate::core::context::ComponentContext;
pub use crate::core::registration::{maybe_construct, maybe_construct_component, maybe_construct_with};
pub use domain::model::Dog;
pub use domain::ports::{Component, DOG_PROFILE};
pub use domain::profiles::{ActiveProfiles, ProfileCondition, ProfileExpr, DEFAULT_PROFILE};
pub use utils::error::{AppError, Result};
