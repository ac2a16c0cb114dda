use dioxus::prelude::*;

use store::UserForm;

use super::ModalOverlay;

#[component]
pub fn UserModal(
    form: UserForm,
    busy: bool,
    on_submit: EventHandler<UserForm>,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| form.clone());
    let current = draft();
    let password_required = form.password_required();

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
                label {
                    r#for: "username",
                    "Kullanıcı Adı"
                    input {
                        id: "username",
                        r#type: "text",
                        required: true,
                        autocomplete: "off",
                        value: "{current.username}",
                        oninput: move |evt: FormEvent| draft.write().username = evt.value(),
                    }
                }
                label {
                    r#for: "password",
                    "Şifre"
                    input {
                        id: "password",
                        r#type: "password",
                        required: password_required,
                        autocomplete: "new-password",
                        value: "{current.password}",
                        oninput: move |evt: FormEvent| draft.write().password = evt.value(),
                    }
                    if !password_required {
                        small { class: "form-help", "Boş bırakılırsa mevcut şifre korunur" }
                    }
                }
                div {
                    class: "form-row",
                    label {
                        r#for: "userFirstName",
                        "İsim"
                        input {
                            id: "userFirstName",
                            r#type: "text",
                            required: true,
                            value: "{current.first_name}",
                            oninput: move |evt: FormEvent| draft.write().first_name = evt.value(),
                        }
                    }
                    label {
                        r#for: "userLastName",
                        "Soyisim"
                        input {
                            id: "userLastName",
                            r#type: "text",
                            required: true,
                            value: "{current.last_name}",
                            oninput: move |evt: FormEvent| draft.write().last_name = evt.value(),
                        }
                    }
                }
                label {
                    class: "checkbox-label",
                    r#for: "isAdmin",
                    input {
                        id: "isAdmin",
                        r#type: "checkbox",
                        checked: current.is_admin,
                        onchange: move |_| {
                            let checked = !draft.read().is_admin;
                            draft.write().is_admin = checked;
                        },
                    }
                    "Admin yetkisi"
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
