pub mod actor;
pub mod parse;
