//! Wordrack
//!
//! Finds every dictionary word that can be spelled from a rack of letter
//! tiles, with wildcard blanks, per-position letter constraints and
//! tile/position scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordrack::core::Rack;
//! use wordrack::engine::QueryEngine;
//!
//! let dictionary = ["CAT", "CATS", "ACT", "TACO", "CATTLE"];
//! let rack = Rack::parse("C,A,T,S").unwrap();
//!
//! let results = QueryEngine::default().query_rack(&dictionary, &rack, None);
//! assert_eq!(results.words(), vec!["CATS"]);
//! ```

// Core domain types
pub mod core;

// Matching, scoring and ranking
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Config file
pub mod config;
