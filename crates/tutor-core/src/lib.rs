//! # tutor-core
//!
//! Core types, ID prefixes, composition logic and error types for Tutor.
//!
//! This crate provides the foundational types shared across all Tutor crates:
//! - Entity structs for the stored records (questions, exercises, videos, lessons, users)
//! - Enums for answer types and entity kinds
//! - The ordered heterogeneous sub-lesson list and splice helpers
//! - Resolved (hydrated) view types returned by the resolution engine
//! - Lesson-authoring input types
//! - Cross-cutting error types

pub mod authoring;
pub mod composition;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod resolved;
