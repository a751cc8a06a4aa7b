//! QR payload assembly from host object fields.
//!
//! Resolves an ordered list of configured field names against a host
//! object and joins the surviving fragments with CRLF, staying under a
//! character budget. Fields that cannot be resolved are skipped.

pub mod builder;
pub mod error;
pub mod record;
pub mod resolve;
pub mod value;

// Re-exports for convenience
pub use builder::{PayloadBuilder, build_payload};
pub use error::ResolveError;
pub use record::Record;
pub use resolve::{FieldRef, resolve};
pub use value::{FieldSource, FieldValue, Related};

/// Separator placed between payload fragments.
pub const FIELD_SEPARATOR: &str = "\r\n";

/// Default payload budget in characters.
pub const DEFAULT_MAX_LENGTH: usize = 4296;
