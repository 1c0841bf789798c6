mod attempt_vm;
mod quiz_vm;
mod time_fmt;

pub use attempt_vm::{AttemptRowVm, map_attempt_rows};
pub use quiz_vm::{
    QuizItemVm, QuizScreenVm, ResultsVm, SavedProgressVm, SubjectCardVm, map_subject_cards,
};
pub use time_fmt::{format_date, format_timer};
