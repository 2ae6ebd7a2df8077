//! Entity structs for all stored Tutor records.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod exercise;
mod lesson;
mod question;
mod user;
mod video;

pub use exercise::Exercise;
pub use lesson::Lesson;
pub use question::{AnswerInput, Question};
pub use user::User;
pub use video::Video;
