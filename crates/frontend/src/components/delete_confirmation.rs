use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Time before the removal confirms itself.
const AUTO_CONFIRM_MS: u32 = 3000;
const TICK_MS: u32 = 10;

#[component]
pub fn DeleteConfirmation(on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut remaining = use_signal(|| AUTO_CONFIRM_MS);

    // Dropped with the component, so closing the modal stops the countdown
    use_future(move || async move {
        while *remaining.read() > 0 {
            TimeoutFuture::new(TICK_MS).await;
            let left = remaining.read().saturating_sub(TICK_MS);
            remaining.set(left);
        }
        on_confirm.call(());
    });

    rsx! {
        div { id: "delete-confirmation",
            h2 { "Are you sure?" }
            p { "Do you really want to remove this place?" }
            div { id: "confirmation-actions",
                button {
                    class: "button-text",
                    onclick: move |_| on_cancel.call(()),
                    "No"
                }
                button {
                    class: "button",
                    onclick: move |_| on_confirm.call(()),
                    "Yes"
                }
            }
            progress { value: "{remaining}", max: "{AUTO_CONFIRM_MS}" }
        }
    }
}
