use std::collections::HashSet;

use thiserror::Error;

use crate::model::{QuizId, SubjectId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("quiz id {0} appears more than once in the catalog")]
    DuplicateQuiz(QuizId),

    #[error("subject id {0} appears more than once in the catalog")]
    DuplicateSubject(SubjectId),
}

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    text: String,
    is_correct: bool,
}

impl Answer {
    #[must_use]
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }

    #[must_use]
    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    #[must_use]
    pub fn wrong(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A multiple-choice question.
///
/// Exactly one answer is expected to be correct. This is an authoring
/// invariant of the catalog and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answers: Vec<Answer>,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Index of the first answer flagged correct, if any.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.answers.iter().position(Answer::is_correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    title: String,
    time_limit_secs: Option<u32>,
    questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        time_limit_secs: Option<u32>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            time_limit_secs,
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Time limit in seconds, `None` when the quiz is untimed.
    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        self.time_limit_secs
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    id: SubjectId,
    name: String,
    icon: String,
    quizzes: Vec<Quiz>,
}

impl Subject {
    #[must_use]
    pub fn new(
        id: SubjectId,
        name: impl Into<String>,
        icon: impl Into<String>,
        quizzes: Vec<Quiz>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            quizzes,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the icon asset used when rendering the subject.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }
}

/// Static, read-only collection of subjects and their quizzes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    subjects: Vec<Subject>,
}

impl Catalog {
    /// Build a catalog from ordered subjects.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a subject id or a quiz id is used twice.
    pub fn new(subjects: Vec<Subject>) -> Result<Self, CatalogError> {
        let mut subject_ids = HashSet::new();
        let mut quiz_ids = HashSet::new();
        for subject in &subjects {
            if !subject_ids.insert(subject.id()) {
                return Err(CatalogError::DuplicateSubject(subject.id().clone()));
            }
            for quiz in subject.quizzes() {
                if !quiz_ids.insert(quiz.id()) {
                    return Err(CatalogError::DuplicateQuiz(quiz.id().clone()));
                }
            }
        }
        Ok(Self { subjects })
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn subject(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id() == id)
    }

    /// All quizzes across every subject, in catalog order.
    pub fn quizzes(&self) -> impl Iterator<Item = &Quiz> {
        self.subjects.iter().flat_map(|subject| subject.quizzes())
    }

    #[must_use]
    pub fn find_quiz(&self, id: &QuizId) -> Option<&Quiz> {
        self.quizzes().find(|quiz| quiz.id() == id)
    }

    #[must_use]
    pub fn quiz_count(&self) -> usize {
        self.quizzes().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(id: &str) -> Quiz {
        Quiz::new(
            QuizId::new(id),
            format!("Quiz {id}"),
            None,
            vec![Question::new(
                "Q",
                vec![Answer::wrong("a"), Answer::correct("b")],
            )],
        )
    }

    #[test]
    fn finds_quiz_across_subjects() {
        let catalog = Catalog::new(vec![
            Subject::new(SubjectId::new("s1"), "One", "heartbeat", vec![quiz("a")]),
            Subject::new(SubjectId::new("s2"), "Two", "heartbeat", vec![quiz("b")]),
        ])
        .unwrap();

        let found = catalog.find_quiz(&QuizId::new("b")).unwrap();
        assert_eq!(found.title(), "Quiz b");
        assert_eq!(catalog.quiz_count(), 2);
        assert!(catalog.find_quiz(&QuizId::new("missing")).is_none());
    }

    #[test]
    fn rejects_duplicate_quiz_ids() {
        let err = Catalog::new(vec![
            Subject::new(SubjectId::new("s1"), "One", "heartbeat", vec![quiz("a")]),
            Subject::new(SubjectId::new("s2"), "Two", "heartbeat", vec![quiz("a")]),
        ])
        .unwrap_err();

        assert_eq!(err, CatalogError::DuplicateQuiz(QuizId::new("a")));
    }

    #[test]
    fn rejects_duplicate_subject_ids() {
        let err = Catalog::new(vec![
            Subject::new(SubjectId::new("s1"), "One", "heartbeat", vec![]),
            Subject::new(SubjectId::new("s1"), "Again", "heartbeat", vec![]),
        ])
        .unwrap_err();

        assert_eq!(err, CatalogError::DuplicateSubject(SubjectId::new("s1")));
    }

    #[test]
    fn correct_index_points_at_flagged_answer() {
        let question = Question::new(
            "Which?",
            vec![Answer::wrong("x"), Answer::wrong("y"), Answer::correct("z")],
        );
        assert_eq!(question.correct_index(), Some(2));
    }
}
