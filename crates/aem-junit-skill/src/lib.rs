#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Guides, Maven configuration and JUnit 5 test templates for AEM projects.

pub mod adapters;
pub mod app;
pub mod bundle;
pub mod common;
pub mod content;
pub mod error;

pub use app::Application;
pub use bundle::BundleLayout;
pub use content::TemplateKind;
pub use error::SkillError;
