//! Sitefl Core
//!
//! This crate provides core types, markers, and error definitions
//! for the sitefl markup compiler.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Marker`] - The closed set of markup markers and their trigger bytes
//! - [`OpenState`], [`CompileState`] - The open-state stack used while scanning
//! - [`SiteflError`] - Error types
//! - [`Position`], [`Span`], [`Warning`] - Source locations and non-fatal diagnostics

pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use enums::{Construct, Marker, OpenState};
pub use error::{Result, SiteflError};
pub use state::{CompileState, MAX_HEADING_LEVEL};
pub use types::{Position, Span, Warning};
