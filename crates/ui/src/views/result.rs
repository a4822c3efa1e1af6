use dioxus::prelude::*;

use crate::vm::ResultVm;

#[component]
pub fn ResultView(result: ResultVm, on_back: EventHandler<()>) -> Element {
    rsx! {
        section { id: "result-page", class: "page result-page",
            h2 { id: "result-type-text", class: "result-type", "{result.headline}" }
            p { id: "result-trait-description", "{result.description}" }

            div { class: "spot",
                h3 { "おすすめの旅先" }
                p { id: "result-spot-name", class: "spot-name", "{result.spot_name}" }
                p { id: "result-spot-reason", "{result.spot_reason}" }
                if let Some(image) = result.image.as_ref() {
                    img {
                        id: "result-image",
                        class: "spot-image",
                        src: "{image.src}",
                        alt: "{image.alt}",
                    }
                }
            }

            button {
                id: "back-to-top-btn",
                class: "secondary",
                onclick: move |_| on_back.call(()),
                "トップに戻る"
            }
        }
    }
}
