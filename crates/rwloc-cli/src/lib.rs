//! rwloc-cli
//! =========
//!
//! Command-line interface for the `rwloc-core` location index.
//!
//! This crate primarily provides a binary (`rwloc`). The library target only
//! exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! rwloc --help
//! rwloc stats
//! rwloc province kigali
//! rwloc villages --cell 1010101
//! rwloc --json village 101010102
//! rwloc query --province-code 1 --sector-name gitega
//! ```
//!
//! For programmatic access use the `rwloc-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
