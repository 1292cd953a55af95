//! Melakarta — a terminal reference for the 72 Carnatic parent scales.
//!
//! Pick a tonic key and one variant for each of R, G, M, D and N; the crate
//! finds the matching melakarta, spells every swara as a Western note name
//! under the key, and can sound the ascending and descending scale.

pub mod audio;
pub mod config;
pub mod error;
pub mod session;
pub mod theory;
pub mod tone;
pub mod tui;
