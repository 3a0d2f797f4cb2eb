//! Error handling for CryptoMatch.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod collaborator_error;
pub mod config_error;
pub mod error_code;
pub mod match_error;

pub use catalog_error::CatalogError;
pub use collaborator_error::CollaboratorError;
pub use config_error::ConfigError;
pub use error_code::MatchErrorCode;
pub use match_error::MatchError;
