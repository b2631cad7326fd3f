//! Test Module
//!
//! Crate-level test suite for the coach pipeline.
//!
//! ## Test Categories
//! - `brain_tests`: classification and sentiment properties over the lexicon
//! - `reply_tests`: template selection, personalization, action attachment
//! - `store_tests`: bounded log, debounced persistence, failure degradation
//! - `integration_tests`: full pipeline scenarios

pub mod store_tests;
