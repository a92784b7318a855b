//! Burnout assessment core for the wellbeing product.
//!
//! [`survey`] tracks a respondent's answers and navigation through a questionnaire;
//! [`scoring`] turns a finished answer ledger into dimension scores, risk zones, and advice.

pub mod config;
pub mod error;
pub mod scoring;
pub mod survey;
pub mod telemetry;
