use dioxus::prelude::*;
use services::Page;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{QuizView, ResultView, TopView, ViewError};
use crate::vm::{QuizIntent, QuizVm};

/// Single-screen host that swaps between the top, quiz and result pages.
#[component]
pub fn QuizScreen() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| QuizVm::new(ctx.new_session()));
    let mut error = use_signal(|| None::<ViewError>);

    let mut dispatch = move |intent: QuizIntent| {
        let outcome = vm.write().apply(intent);
        match outcome {
            Ok(_) => error.set(None),
            Err(err) => {
                warn!(?intent, "quiz intent rejected");
                error.set(Some(err));
            }
        }
    };

    let page = vm.read().page();
    let total_questions = vm.read().session().dataset().total_questions();
    let app_name = ctx.app_name().to_owned();

    let body = match page {
        Page::Top => rsx! {
            TopView {
                app_name,
                total_questions,
                on_start: move |()| dispatch(QuizIntent::Start),
            }
        },
        Page::Quiz => match vm.read().question() {
            Some(question) => rsx! {
                QuizView {
                    question,
                    on_choose: move |value| dispatch(QuizIntent::Choose(value)),
                }
            },
            None => rsx! {},
        },
        Page::Result => match vm.read().result() {
            Some(result) => rsx! {
                ResultView {
                    result,
                    on_back: move |()| dispatch(QuizIntent::BackToTop),
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        main { class: "quiz-screen", "data-page": "{page}",
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            {body}
        }
    }
}
