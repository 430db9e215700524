use dioxus::prelude::*;

#[component]
pub fn ErrorPanel(title: String, message: String, on_confirm: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "error",
            h2 { "{title}" }
            p { "{message}" }
            if let Some(on_confirm) = on_confirm {
                div { id: "confirmation-actions",
                    button {
                        class: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Okay"
                    }
                }
            }
        }
    }
}
