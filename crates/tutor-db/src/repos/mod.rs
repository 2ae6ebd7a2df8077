//! Repository modules implementing the Tutor stores.
//!
//! Each module adds methods to `TutorService` via `impl TutorService` blocks.

pub mod exercise;
pub mod lesson;
pub mod question;
pub mod user;
pub mod video;
