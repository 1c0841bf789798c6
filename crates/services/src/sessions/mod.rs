mod view;
mod workflow;

pub use view::{ActiveQuizView, QuizResults};
pub use workflow::{QuizFlowService, StepOutcome};
