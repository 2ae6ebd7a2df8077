pub mod dispatch;
pub mod exercise;
pub mod lesson;
pub mod question;
pub mod shared;
pub mod user;
pub mod video;
