use dioxus::prelude::*;

use store::ExitForm;

use super::ModalOverlay;

/// Asks for the time a visitor left.
#[component]
pub fn ExitModal(
    form: ExitForm,
    busy: bool,
    on_submit: EventHandler<ExitForm>,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| form.clone());
    let current = draft();

    rsx! {
        ModalOverlay {
            title: "Çıkış Kaydet",
            on_close,
            form {
                class: "modal-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(draft());
                },
                p { class: "modal-subject", "{form.visitor_name}" }
                label {
                    r#for: "exitTimeOnly",
                    "Çıkış Saati"
                    input {
                        id: "exitTimeOnly",
                        r#type: "time",
                        required: true,
                        value: "{current.exit_time}",
                        oninput: move |evt: FormEvent| draft.write().exit_time = evt.value(),
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "button button--secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "İptal"
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: busy,
                        "Çıkış Yap"
                    }
                }
            }
        }
    }
}
