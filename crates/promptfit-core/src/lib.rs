//! promptfit-core: question bank model, scoring engine, and reports.
//!
//! This crate defines the question bank data model, the answer set handed
//! over by an answer collector, and the pure scoring logic that turns a
//! completed answer set into category scores and a recommendation tier.

pub mod advice;
pub mod answers;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod session;
pub mod statistics;
