#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod error;
mod helpers;
#[cfg(feature = "url")]
mod interop;
mod percent_encode;

mod absolute_url;
mod query;
mod relative_url;
mod user_info;

// Public API
pub use absolute_url::AbsoluteUrl;
pub use error::{ParseError, Result};
pub use percent_encode::{percent_decode, percent_encode};
pub use query::{Query, QueryParameter};
pub use relative_url::RelativeUrl;
pub use user_info::UserInfo;
