//! threadgen: custom thread profiles for Fusion 360
//!
//! Generates thread-library XML files from a JSON configuration. Each
//! configured profile expands into designations (size and pitch pairings)
//! and thread records (external/internal pairs per fit offset) and is
//! rendered into the ThreadType schema Fusion 360 loads from its
//! ThreadData directory.

pub mod cli;
pub mod config;
pub mod document;
pub mod format;
pub mod profile;
