use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{QuizService, QuizSession};
use storage::json::embedded_dataset;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizScreen, QuizView, ResultView};
use crate::vm::{QuestionVm, ResultVm};

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "旅のタイプ診断"
    }

    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizScreen {} }
}

#[component]
fn QuizViewHarness(question: QuestionVm) -> Element {
    rsx! {
        QuizView { question, on_choose: move |_| {} }
    }
}

#[component]
fn ResultViewHarness(result: ResultVm) -> Element {
    rsx! {
        ResultView { result, on_back: move |()| {} }
    }
}

pub fn quiz_service() -> Arc<QuizService> {
    Arc::new(QuizService::new(embedded_dataset().expect("embedded dataset")))
}

/// A session on the embedded dataset, started and advanced by `answers`.
pub fn session_after(answers: &[u32]) -> QuizSession {
    let mut session = quiz_service().new_session();
    session.start();
    for &value in answers {
        session.answer(value).expect("answer accepted");
    }
    session
}

pub fn render_screen() -> String {
    let app = Arc::new(TestApp {
        quiz: quiz_service(),
    });
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { app });
    render(&mut dom)
}

pub fn render_quiz_view(question: QuestionVm) -> String {
    let mut dom = VirtualDom::new_with_props(QuizViewHarness, QuizViewHarnessProps { question });
    render(&mut dom)
}

pub fn render_result_view(result: ResultVm) -> String {
    let mut dom =
        VirtualDom::new_with_props(ResultViewHarness, ResultViewHarnessProps { result });
    render(&mut dom)
}

fn render(dom: &mut VirtualDom) -> String {
    dom.rebuild_in_place();
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(dom)
}
