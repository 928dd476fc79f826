//! # Constants
//!
//! Parameters shared by the decoder, the splitter and the share document.
//!
//! The [`params`] module holds the numeric bounds and defaults, the [`types`] module
//! the aliases used for share coordinates.

pub mod params;
pub mod types;
