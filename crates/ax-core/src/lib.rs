//! Domain logic for the Arxignis CLI.
//!
//! Input syntax validation and site configuration documents. Everything in
//! this crate is pure: no I/O, no async, no process state. Callers own the
//! prompts, files, and network requests built on top.

pub mod site_config;
pub mod validate;

pub use site_config::{SiteConfig, Transformation};
pub use validate::{
    InvalidInput, TOKEN_LEN, strip_scheme, validate_domain, validate_target, validate_token,
};
