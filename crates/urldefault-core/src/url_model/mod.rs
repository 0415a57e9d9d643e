//! URL modeling and defaults merging.
//!
//! Parses a primary URL that may be partial (no scheme, no port, no path)
//! and backfills each missing part from a fully qualified defaults URL.
//! Syntax is delegated to the `url` crate; this module only decides which
//! input each part comes from.

mod error;
mod host;
mod merge;
mod parts;

pub use error::{InputRole, ParseError};
pub use host::{join_host_port, split_host_port};
pub use merge::{merge, parse, parse_with_defaults};
pub use parts::{UrlParts, UserInfo};
