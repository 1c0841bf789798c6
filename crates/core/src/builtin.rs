//! Built-in question bank shipped with the app.

use crate::model::{Answer, Catalog, CatalogError, Question, Quiz, QuizId, Subject, SubjectId};

/// Icon used for every built-in subject.
pub const HEARTBEAT_ICON: &str = "heartbeat";

const EMPTY_SUBJECTS: &[(&str, &str)] = &[
    ("biochemistry", "Biochemistry"),
    ("pharmacology", "Pharmacology"),
    ("pathology", "Pathology"),
    ("microbiology", "Microbiology"),
    ("forensic_medicine", "Forensic Medicine"),
    ("community_medicine", "Community Medicine"),
    ("ophthalmology", "Ophthalmology"),
    ("ent", "ENT"),
    ("general_medicine", "General Medicine"),
    ("general_surgery", "General Surgery"),
    ("obs_gynae", "Obs & Gynae"),
    ("paediatrics", "Paediatrics"),
    ("orthopaedics", "Orthopaedics"),
    ("psychiatry", "Psychiatry"),
    ("dermatology", "Dermatology"),
    ("radiology", "Radiology"),
    ("anesthesiology", "Anesthesiology"),
];

/// Four-option question whose correct option sits at `correct`.
fn question(text: &str, options: [&str; 4], correct: usize) -> Question {
    let answers = options
        .iter()
        .enumerate()
        .map(|(idx, option)| Answer::new(*option, idx == correct))
        .collect();
    Question::new(text, answers)
}

fn anatomy() -> Subject {
    let skull = Quiz::new(
        QuizId::new("ana-q1"),
        "Bones of the Skull",
        Some(180),
        vec![
            question(
                "Which bone is also known as the jawbone?",
                ["Maxilla", "Mandible", "Zygomatic bone", "Frontal bone"],
                1,
            ),
            question(
                "The sella turcica is part of which bone?",
                ["Ethmoid bone", "Temporal bone", "Sphenoid bone", "Occipital bone"],
                2,
            ),
            question(
                "How many cranial bones are there in the human skull?",
                ["6", "8", "10", "14"],
                1,
            ),
        ],
    );
    let upper_limb = Quiz::new(
        QuizId::new("ana-q2"),
        "Upper Limb Muscles",
        None,
        vec![
            question(
                "Which muscle is the primary abductor of the arm at the shoulder joint?",
                ["Pectoralis major", "Latissimus dorsi", "Teres major", "Deltoid"],
                3,
            ),
            question(
                "The biceps brachii muscle has how many heads?",
                ["One", "Two", "Three", "Four"],
                1,
            ),
        ],
    );
    Subject::new(
        SubjectId::new("anatomy"),
        "Anatomy",
        HEARTBEAT_ICON,
        vec![skull, upper_limb],
    )
}

fn physiology() -> Subject {
    let cardiac = Quiz::new(
        QuizId::new("phy-q1"),
        "Cardiac Cycle",
        Some(300),
        vec![
            question(
                "What is the \"pacemaker\" of the heart?",
                ["AV node", "SA node", "Bundle of His", "Purkinje fibers"],
                1,
            ),
            question(
                "Systole refers to the phase of...",
                ["Relaxation", "Contraction", "Filling", "Resting"],
                1,
            ),
        ],
    );
    Subject::new(
        SubjectId::new("physiology"),
        "Physiology",
        HEARTBEAT_ICON,
        vec![cardiac],
    )
}

/// The catalog bundled with the application.
///
/// # Errors
///
/// Returns `CatalogError` if the bundled data contains duplicate ids.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let mut subjects = vec![anatomy(), physiology()];
    subjects.extend(
        EMPTY_SUBJECTS
            .iter()
            .map(|(id, name)| Subject::new(SubjectId::new(*id), *name, HEARTBEAT_ICON, Vec::new())),
    );
    Catalog::new(subjects)
}
