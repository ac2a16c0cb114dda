use dioxus::prelude::*;

use store::{VisitorForm, VisitorType};

use super::ModalOverlay;

/// Add/edit form for a visitor. Owns a draft of `form` until submitted.
#[component]
pub fn VisitorModal(
    form: VisitorForm,
    busy: bool,
    on_submit: EventHandler<VisitorForm>,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| form.clone());
    let current = draft();

    rsx! {
        ModalOverlay {
            title: form.title().to_string(),
            on_close,
            form {
                class: "modal-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(draft());
                },
                div {
                    class: "form-row",
                    label {
                        r#for: "firstName",
                        "İsim"
                        input {
                            id: "firstName",
                            r#type: "text",
                            required: true,
                            value: "{current.first_name}",
                            oninput: move |evt: FormEvent| draft.write().first_name = evt.value(),
                        }
                    }
                    label {
                        r#for: "lastName",
                        "Soyisim"
                        input {
                            id: "lastName",
                            r#type: "text",
                            required: true,
                            value: "{current.last_name}",
                            oninput: move |evt: FormEvent| draft.write().last_name = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-row",
                    label {
                        r#for: "company",
                        "Şirket"
                        input {
                            id: "company",
                            r#type: "text",
                            value: "{current.company}",
                            oninput: move |evt: FormEvent| draft.write().company = evt.value(),
                        }
                    }
                    label {
                        r#for: "plate",
                        "Plaka"
                        input {
                            id: "plate",
                            r#type: "text",
                            value: "{current.plate}",
                            oninput: move |evt: FormEvent| draft.write().plate = evt.value(),
                        }
                    }
                }
                label {
                    r#for: "visitorType",
                    "Ziyaretçi Türü"
                    select {
                        id: "visitorType",
                        onchange: move |evt: FormEvent| {
                            draft.write().visitor_type = VisitorType::from_code(&evt.value());
                        },
                        for kind in current.visitor_type.choices() {
                            option {
                                value: kind.code(),
                                selected: kind == current.visitor_type,
                                {kind.label()}
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    label {
                        r#for: "entryDate",
                        "Giriş Tarihi"
                        input {
                            id: "entryDate",
                            r#type: "date",
                            required: true,
                            value: "{current.entry_date}",
                            oninput: move |evt: FormEvent| draft.write().entry_date = evt.value(),
                        }
                    }
                    label {
                        r#for: "entryTime",
                        "Giriş Saati"
                        input {
                            id: "entryTime",
                            r#type: "time",
                            required: true,
                            value: "{current.entry_time}",
                            oninput: move |evt: FormEvent| draft.write().entry_time = evt.value(),
                        }
                    }
                    label {
                        r#for: "exitTime",
                        "Çıkış Saati"
                        input {
                            id: "exitTime",
                            r#type: "time",
                            value: "{current.exit_time}",
                            oninput: move |evt: FormEvent| draft.write().exit_time = evt.value(),
                        }
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
                        "Kaydet"
                    }
                }
            }
        }
    }
}
