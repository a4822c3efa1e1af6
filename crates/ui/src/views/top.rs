use dioxus::prelude::*;

#[component]
pub fn TopView(app_name: String, total_questions: usize, on_start: EventHandler<()>) -> Element {
    rsx! {
        section { id: "top-page", class: "page top-page",
            h1 { "{app_name}" }
            p { class: "lead",
                "{total_questions}の質問に答えて、あなたの性格にぴったりの旅先を見つけましょう。"
            }
            button {
                id: "start-btn",
                class: "primary",
                onclick: move |_| on_start.call(()),
                "診断スタート"
            }
        }
    }
}
