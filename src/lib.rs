//! HeroCard - Deterministic snapshot cards for RPG adventurers
//!
//! This library turns an immutable adventurer snapshot (stats, equipment,
//! inventory, vitals) into:
//! - An SVG document with themed, optionally animated pages
//! - A JSON metadata document embedding the SVG as a Base64 data URI
//!
//! The whole pipeline is a pure function of its inputs: no I/O, no state,
//! and byte-identical output for identical input.

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod metadata;
pub mod page;
pub mod render;
pub mod snapshot;
pub mod template;
pub mod text;
pub mod theme;
