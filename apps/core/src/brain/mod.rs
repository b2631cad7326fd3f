//! # Brain Module
//!
//! Fast, non-ML text analysis for the coach pipeline. Analyzes user input
//! before a reply is generated.
//!
//! ## Components
//! - `lexicon`: static intent/sentiment keyword data (TR + EN)
//! - `tagger`: heuristic noun/verb tagging for the fuzzy fallback
//! - `intent`: keyword intent classification with fuzzy fallback
//! - `sentiment`: valence scoring with keyword-count fallback

pub mod intent;
pub mod lexicon;
pub mod sentiment;
pub mod tagger;

pub use intent::{ClassificationResult, IntentClassifier};
pub use lexicon::{Intent, Sentiment};
pub use sentiment::{sentiment_for_score, SentimentAnalyzer, SentimentResult};
pub use tagger::{HeuristicTagger, PosTag};
