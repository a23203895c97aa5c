//! Common utilities for the Lantern document container.
//!
//! This crate provides infrastructure shared by the painting and container
//! crates:
//! - **URL Resolution** - resolving document references against a base URL
//! - **Warning System** - colored, deduplicated terminal output for
//!   recoverable problems
//! - **Images** - the decoded image type stored in the pixmap cache
//! - **Fetching** - blocking HTTP, `data:` URL, and local file reads

pub mod image;
pub mod net;
pub mod url;
pub mod warning;
