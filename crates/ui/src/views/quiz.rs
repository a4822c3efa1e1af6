use dioxus::prelude::*;

use crate::vm::{CHOICES, QuestionVm};

#[component]
pub fn QuizView(question: QuestionVm, on_choose: EventHandler<u32>) -> Element {
    rsx! {
        section { id: "quiz-page", class: "page quiz-page",
            div { class: "progress",
                p { id: "quiz-progress-text", class: "progress-text", "{question.progress_text}" }
                div { class: "progress-bar",
                    div {
                        id: "progress-fill",
                        class: "progress-fill",
                        style: "width: {question.progress_width}",
                    }
                }
            }

            h2 { id: "question-text", class: "question", "{question.text}" }

            div { class: "choices",
                for choice in CHOICES {
                    button {
                        key: "{choice.value}",
                        class: "choice-btn",
                        "data-score": "{choice.value}",
                        onclick: move |_| on_choose.call(choice.value),
                        span { class: "choice-score", "{choice.value}" }
                        span { class: "choice-label", "{choice.label}" }
                    }
                }
            }
        }
    }
}
