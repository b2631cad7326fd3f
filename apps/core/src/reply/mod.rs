//! # Reply Module
//!
//! Turns a classified (intent, sentiment) pair into a personalized reply.
//!
//! ## Components
//! - `templates`: the authored variant catalog, generic openings and quotes
//! - `generator`: variant selection, quote augmentation, personalization,
//!   action attachment

pub mod generator;
pub mod templates;

pub use generator::ResponseGenerator;
