//! Scaffold new Sitefox projects from bundled templates.
//!
//! A [`templates::Template`] is copied into a fresh directory, its placeholder
//! token is renamed and substituted with the [`name::ProjectName`], and an
//! optional install command is run inside the result.

pub mod config;
pub mod error;
pub mod fsops;
pub mod guidance;
pub mod install;
pub mod instantiate;
pub mod name;
pub mod templates;

pub use error::{Result, ScaffoldError};
pub use instantiate::{Generated, instantiate};
