//! Bus search service for Bangalore city (BMTC) and Karnataka intercity
//! (KSRTC) travel.
//!
//! Answers "which bus gets me from here to there?": local trips are resolved
//! against static route tables, intercity trips are fetched from the KSRTC
//! availability endpoint with a synthesized fallback.

pub mod bmtc;
pub mod categorize;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ksrtc;
pub mod network;
pub mod search;
pub mod web;
