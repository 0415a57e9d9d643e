pub mod config;
pub mod logging;
pub mod url_model;

pub use url_model::{merge, parse, parse_with_defaults, ParseError, UrlParts, UserInfo};
