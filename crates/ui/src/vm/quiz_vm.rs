use quiz_core::model::{Catalog, SavedQuizState, Subject};
use services::{ActiveQuizView, QuizResults};

use super::time_fmt::format_timer;

const URGENT_SECS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub title: String,
    pub progress_label: String,
    /// Share of questions already answered, 0..=100.
    pub progress_pct: u32,
    pub question: String,
    pub answers: Vec<String>,
    pub timer_label: Option<String>,
    pub timer_urgent: bool,
}

impl QuizScreenVm {
    #[must_use]
    pub fn from_view(view: &ActiveQuizView) -> Self {
        let answered = u32::try_from(view.question_index).unwrap_or(u32::MAX);
        let progress_pct = if view.total_questions == 0 {
            0
        } else {
            answered.saturating_mul(100) / view.total_questions
        };
        Self {
            title: view.quiz_title.clone(),
            progress_label: format!(
                "Question {} of {}",
                view.question_index + 1,
                view.total_questions
            ),
            progress_pct,
            question: view.question.clone(),
            answers: view.answers.clone(),
            timer_label: view.time_left.map(format_timer),
            timer_urgent: view.time_left.is_some_and(|secs| secs <= URGENT_SECS),
        }
    }
}

/// "Continue where you left off" card on the home screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedProgressVm {
    pub title: String,
    pub progress_label: String,
    pub timer_label: Option<String>,
}

impl SavedProgressVm {
    /// `None` when the snapshot's quiz is not in the catalog.
    #[must_use]
    pub fn from_saved(saved: &SavedQuizState, catalog: &Catalog) -> Option<Self> {
        let quiz = catalog.find_quiz(&saved.quiz_id)?;
        Some(Self {
            title: quiz.title().to_string(),
            progress_label: format!(
                "Question {} of {}",
                saved.current_question_index + 1,
                quiz.question_count()
            ),
            timer_label: saved
                .time_left
                .map(|secs| format!("{} left", format_timer(secs))),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub title: String,
    pub score_label: String,
    pub percentage_label: String,
    pub headline: &'static str,
    pub timed_out: bool,
}

impl ResultsVm {
    #[must_use]
    pub fn from_results(results: &QuizResults) -> Self {
        let percentage = results.percentage();
        let headline = match percentage {
            80.. => "Excellent work!",
            50..=79 => "Good effort!",
            _ => "Keep practicing!",
        };
        Self {
            title: results.quiz_title.clone(),
            score_label: format!("{} / {}", results.score, results.total_questions),
            percentage_label: format!("{percentage}%"),
            headline,
            timed_out: results.timed_out(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectCardVm {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub quiz_count_label: String,
    pub quizzes: Vec<QuizItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizItemVm {
    pub id: String,
    pub title: String,
    pub detail_label: String,
}

impl SubjectCardVm {
    fn from_subject(subject: &Subject) -> Self {
        let count = subject.quizzes().len();
        let quiz_count_label = match count {
            0 => "Coming soon".to_string(),
            1 => "1 quiz".to_string(),
            n => format!("{n} quizzes"),
        };
        let quizzes = subject
            .quizzes()
            .iter()
            .map(|quiz| {
                let questions = match quiz.question_count() {
                    1 => "1 question".to_string(),
                    n => format!("{n} questions"),
                };
                let detail_label = match quiz.time_limit_secs() {
                    Some(secs) => format!("{questions} · {}", format_timer(secs)),
                    None => format!("{questions} · untimed"),
                };
                QuizItemVm {
                    id: quiz.id().to_string(),
                    title: quiz.title().to_string(),
                    detail_label,
                }
            })
            .collect();
        Self {
            id: subject.id().to_string(),
            name: subject.name().to_string(),
            icon: subject.icon().to_string(),
            quiz_count_label,
            quizzes,
        }
    }
}

#[must_use]
pub fn map_subject_cards(catalog: &Catalog) -> Vec<SubjectCardVm> {
    catalog
        .subjects()
        .iter()
        .map(SubjectCardVm::from_subject)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::builtin_catalog;
    use quiz_core::model::QuizId;
    use quiz_core::session::CompletionReason;

    fn view(index: usize, time_left: Option<u32>) -> ActiveQuizView {
        ActiveQuizView {
            quiz_id: QuizId::new("ana-q1"),
            quiz_title: "Bones of the Skull".into(),
            question_index: index,
            total_questions: 4,
            question: "Which bone?".into(),
            answers: vec!["Frontal".into(), "Femur".into()],
            score: 0,
            time_left,
        }
    }

    #[test]
    fn quiz_screen_labels() {
        let vm = QuizScreenVm::from_view(&view(1, Some(65)));
        assert_eq!(vm.progress_label, "Question 2 of 4");
        assert_eq!(vm.progress_pct, 25);
        assert_eq!(vm.timer_label.as_deref(), Some("1:05"));
        assert!(!vm.timer_urgent);

        let vm = QuizScreenVm::from_view(&view(3, Some(10)));
        assert!(vm.timer_urgent);

        let vm = QuizScreenVm::from_view(&view(0, None));
        assert!(vm.timer_label.is_none());
    }

    #[test]
    fn saved_progress_needs_known_quiz() {
        let catalog = builtin_catalog().unwrap();
        let saved = SavedQuizState::new(QuizId::new("ana-q1"), 1, 1, Some(120));
        let vm = SavedProgressVm::from_saved(&saved, &catalog).unwrap();
        assert_eq!(vm.title, "Bones of the Skull");
        assert_eq!(vm.progress_label, "Question 2 of 3");
        assert_eq!(vm.timer_label.as_deref(), Some("2:00 left"));

        let unknown = SavedQuizState::new(QuizId::new("missing"), 0, 0, None);
        assert!(SavedProgressVm::from_saved(&unknown, &catalog).is_none());
    }

    #[test]
    fn results_headline_by_percentage() {
        let results = QuizResults {
            quiz_id: QuizId::new("phy-q1"),
            quiz_title: "Cardiac Cycle".into(),
            score: 1,
            total_questions: 2,
            reason: CompletionReason::TimeExpired,
        };
        let vm = ResultsVm::from_results(&results);
        assert_eq!(vm.score_label, "1 / 2");
        assert_eq!(vm.percentage_label, "50%");
        assert_eq!(vm.headline, "Good effort!");
        assert!(vm.timed_out);
    }

    #[test]
    fn subject_cards_mark_empty_subjects() {
        let catalog = builtin_catalog().unwrap();
        let cards = map_subject_cards(&catalog);
        assert_eq!(cards.len(), catalog.subjects().len());
        let anatomy = &cards[0];
        assert_eq!(anatomy.quiz_count_label, "2 quizzes");
        assert!(anatomy.quizzes[1].detail_label.ends_with("untimed"));
        assert!(cards.iter().any(|card| card.quiz_count_label == "Coming soon"));
    }
}
