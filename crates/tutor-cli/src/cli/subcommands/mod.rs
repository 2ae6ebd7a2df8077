mod exercise;
mod lesson;
mod question;
mod user;
mod video;

pub use exercise::ExerciseCommands;
pub use lesson::LessonCommands;
pub use question::QuestionCommands;
pub use user::UserCommands;
pub use video::VideoCommands;
