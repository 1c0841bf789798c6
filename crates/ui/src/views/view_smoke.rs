use quiz_core::model::{QuizAttempt, QuizId, SavedQuizState, UserProfileDraft};
use quiz_core::navigation::Screen;
use quiz_core::time::fixed_now;
use storage::Storage;

use super::test_harness::{ViewHarness, bootstrap, logged_in};

#[tokio::test(flavor = "current_thread")]
async fn fresh_install_shows_login_without_nav() {
    let services = bootstrap(Storage::in_memory()).await;
    let mut harness = ViewHarness::new(services, Screen::Home);

    let html = harness.html();
    assert!(html.contains("Welcome back"), "missing login title in {html}");
    assert!(html.contains("Create an account"), "missing signup link in {html}");
    assert!(!html.contains("bottom-nav"), "nav bar rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sign_up_screen_is_selectable() {
    let services = bootstrap(Storage::in_memory()).await;
    services
        .auth()
        .show_screen(quiz_core::model::AuthScreen::SignUp);
    let mut harness = ViewHarness::new(services, Screen::Home);

    let html = harness.html();
    assert!(html.contains("Create your account"), "missing signup title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn persisted_token_shows_pin_screen() {
    let storage = Storage::in_memory();
    bootstrap(storage.clone())
        .await
        .auth()
        .login("")
        .await
        .expect("login");

    let restarted = bootstrap(storage).await;
    let mut harness = ViewHarness::new(restarted, Screen::Home);

    let html = harness.html();
    assert!(html.contains("Enter your PIN"), "missing pin title in {html}");
    assert!(html.contains("user@example.com"), "missing identity in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_shows_continue_card_and_recent_attempts() {
    let storage = Storage::in_memory();
    let first = logged_in(storage.clone()).await;
    first
        .history()
        .append(QuizAttempt::new(
            QuizId::new("phy-q1"),
            "Cardiac Cycle",
            1,
            2,
            fixed_now(),
        ))
        .await
        .expect("append");
    storage
        .save(&SavedQuizState::new(QuizId::new("ana-q1"), 1, 1, Some(120)))
        .await
        .expect("save snapshot");

    let restarted = bootstrap(storage).await;
    restarted.auth().unlock("1234").expect("unlock");
    let mut harness = ViewHarness::new(restarted, Screen::Home);

    let html = harness.html();
    assert!(html.contains("Continue where you left off"), "missing continue card in {html}");
    assert!(html.contains("Bones of the Skull"), "missing saved quiz in {html}");
    assert!(html.contains("Question 2 of 3"), "missing saved position in {html}");
    assert!(html.contains("Cardiac Cycle"), "missing recent attempt in {html}");
    assert!(html.contains("bottom-nav"), "missing nav bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn library_lists_subjects() {
    let services = logged_in(Storage::in_memory()).await;
    let mut harness = ViewHarness::new(services, Screen::Library);

    let html = harness.html();
    assert!(html.contains("Anatomy"), "missing subject in {html}");
    assert!(html.contains("Physiology"), "missing subject in {html}");
    assert!(html.contains("Coming soon"), "missing empty subject label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn active_quiz_takes_over_the_screen() {
    let services = logged_in(Storage::in_memory()).await;
    services
        .quiz_flow()
        .start_quiz(&QuizId::new("ana-q1"))
        .await
        .expect("start");
    let mut harness = ViewHarness::new(services, Screen::Settings);

    let html = harness.html();
    assert!(
        html.contains("Which bone is also known as the jawbone?"),
        "missing question in {html}"
    );
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("3:00"), "missing timer in {html}");
    assert!(!html.contains("bottom-nav"), "nav bar rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_follow_the_last_answer() {
    let services = logged_in(Storage::in_memory()).await;
    let flow = services.quiz_flow();
    flow.start_quiz(&QuizId::new("phy-q1")).await.expect("start");
    flow.answer(0).await.expect("answer");
    flow.answer(0).await.expect("answer");
    let mut harness = ViewHarness::new(services, Screen::Home);

    let html = harness.html();
    assert!(html.contains("Cardiac Cycle"), "missing quiz title in {html}");
    assert!(html.contains("/ 2"), "missing score in {html}");
    assert!(html.contains("Try again"), "missing restart action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_shows_profile_and_stats() {
    let services = logged_in(Storage::in_memory()).await;
    services
        .profile()
        .update(UserProfileDraft {
            name: "Ada".into(),
            college: "St Mary's".into(),
            ..UserProfileDraft::new()
        })
        .await
        .expect("profile");
    services
        .history()
        .append(QuizAttempt::new(
            QuizId::new("ana-q2"),
            "Upper Limb Muscles",
            2,
            2,
            fixed_now(),
        ))
        .await
        .expect("append");
    let mut harness = ViewHarness::new(services, Screen::Settings);

    let html = harness.html();
    assert!(html.contains("Ada"), "missing profile name in {html}");
    assert!(html.contains("100%"), "missing best score in {html}");
    assert!(html.contains("Log out"), "missing logout in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_screen_hides_nav_bar() {
    let services = logged_in(Storage::in_memory()).await;
    let mut harness = ViewHarness::new(services, Screen::History);

    let html = harness.html();
    assert!(html.contains("Quiz history"), "missing title in {html}");
    assert!(html.contains("No quizzes taken yet."), "missing empty state in {html}");
    assert!(!html.contains("bottom-nav"), "nav bar rendered in {html}");
}
