//! formtpl-core — form template lookup library.
//!
//! This crate infers the semantic type of submitted field values and picks
//! the stored form template whose field signature they satisfy.
//!
//! # Architecture
//!
//! ```text
//! raw values ──► Detector ──► Matcher ──► MatchOutcome
//!                               ▲
//!                 Store ────────┘ (TemplateSource)
//! ```
//!
//! Everything is synchronous; each lookup reads the store once and scans it
//! in stored order.

pub mod config;
pub mod detector;
pub mod matcher;
pub mod seed;
pub mod store;
pub mod types;

pub use detector::detect;
pub use matcher::{find_matching_form, infer_types, resolve, TemplateSource};
pub use store::{JsonStore, StoreError};
pub use types::{FieldSet, FieldType, MatchOutcome, Template, TypeMap};
