use crate::vm::{QuizVm, ResultVm, map_result};

use super::test_harness::{render_quiz_view, render_result_view, render_screen, session_after};

#[test]
fn screen_starts_on_top_page() {
    let html = render_screen();
    assert!(html.contains("診断スタート"), "missing start button in {html}");
    assert!(html.contains("旅のタイプ診断"), "missing app name in {html}");
    assert!(html.contains("16の質問"), "missing question count in {html}");
    assert!(!html.contains("choice-btn"), "quiz rendered too early: {html}");
}

#[test]
fn quiz_view_renders_progress_and_choices() {
    let vm = QuizVm::new(session_after(&[3, 3, 3, 3]));
    let question = vm.question().expect("quiz page");

    let html = render_quiz_view(question);

    assert!(html.contains("5 / 16 問"), "missing progress text in {html}");
    assert!(html.contains("25%"), "missing progress width in {html}");
    assert_eq!(html.matches("choice-btn").count(), 5, "{html}");
    assert!(html.contains("あてはまらない"), "{html}");
    assert!(html.contains("ややあてはまる"), "{html}");
}

#[test]
fn result_view_renders_spot_and_image() {
    let vm = QuizVm::new(session_after(&[5; 16]));
    let result = vm.result().expect("result page");

    let html = render_result_view(result.clone());

    assert!(html.contains(&result.headline), "missing headline in {html}");
    assert!(html.contains(&result.spot_name), "missing spot in {html}");
    assert!(html.contains("<img"), "missing image in {html}");
    assert!(html.contains("トップに戻る"), "missing back button in {html}");
}

#[test]
fn result_view_omits_empty_image() {
    let session = session_after(&[5; 16]);
    let mut record = session.current_result().expect("result").clone();
    record.image_url.clear();
    let result: ResultVm = map_result(&record);

    let html = render_result_view(result);

    assert!(!html.contains("<img"), "unexpected image in {html}");
}
