//! ID prefix constants.
//!
//! Every stored record gets an ID of the form `{prefix}-{8 hex chars}`,
//! generated by the database (`randomblob(4)`).

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_QUESTION: &str = "qst";
pub const PREFIX_EXERCISE: &str = "exr";
pub const PREFIX_VIDEO: &str = "vid";
pub const PREFIX_LESSON: &str = "lsn";

/// All prefixes, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_USER,
    PREFIX_QUESTION,
    PREFIX_EXERCISE,
    PREFIX_VIDEO,
    PREFIX_LESSON,
];

/// Format an ID from its prefix and random part.
#[must_use]
pub fn format_id(prefix: &str, random: &str) -> String {
    format!("{prefix}-{random}")
}
