//! Protocol Quiz - Localized Multiple-Choice Quiz Service
//!
//! This crate serves multiple-choice questions about a protocol's architecture
//! in several languages, checks submitted answers, resolves translation keys,
//! and drives a quiz session from start to result.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
