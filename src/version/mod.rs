//! Natural version ordering and windowing
//!
//! This module holds the pure pipeline behind the release matrix. Nothing
//! here touches storage or shared state; every function works only on its
//! arguments.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Token    │────▶│   Compare   │────▶│   Window    │
//! │ (tokenize)  │     │(natural ord)│     │(focal ±n)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       ▲
//!        ▼                                       │
//! ┌─────────────┐                         ┌─────────────┐
//! │   Latest    │────────────────────────▶│   Family    │
//! │ (max parts) │                         │(major.minor)│
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`]: Splits versions into digit and non-digit runs
//! - [`compare`]: Natural-order comparison and direction-aware sorting
//! - [`latest`]: Latest major.minor.patch by independent segment maximization
//! - [`family`]: Prefix filtering and selection parsing
//! - [`window`]: Bounded window around a focal version
//! - [`error`]: Error types for the pipeline and release stores

pub mod compare;
pub mod error;
pub mod family;
pub mod latest;
pub mod token;
pub mod window;

pub use compare::{SortDirection, compare_directed, compare_versions, sort_versions};
pub use error::{MatrixError, StoreError};
pub use family::{FamilyPrefix, filter_family};
pub use latest::{LatestVersion, resolve_latest};
pub use token::{Token, tokenize};
pub use window::{DEFAULT_HALFWIDTH, Entry, window};
