use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCrown, FaPenToSquare, FaTrash};
use dioxus_free_icons::Icon;

use store::table::{MISSING, USER_COLUMNS};
use store::{Role, TableView, UserRow};

use super::DateCellView;

#[component]
pub fn UserTable(
    view: TableView<UserRow>,
    on_edit: EventHandler<u64>,
    on_delete: EventHandler<u64>,
) -> Element {
    let columns = USER_COLUMNS.len();

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    for column in USER_COLUMNS {
                        th { key: "{column}", "{column}" }
                    }
                }
            }
            tbody {
                {match view {
                    TableView::Placeholder(message) => rsx! {
                        tr {
                            td { class: "table-placeholder", colspan: "{columns}", "{message}" }
                        }
                    },
                    TableView::Rows(rows) => rsx! {
                        for row in rows {
                            UserTableRow {
                                key: "{row.id}",
                                row: row.clone(),
                                on_edit,
                                on_delete,
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn UserTableRow(row: UserRow, on_edit: EventHandler<u64>, on_delete: EventHandler<u64>) -> Element {
    let id = row.id;
    let role_class = match row.role {
        Role::Admin => "badge badge--admin",
        Role::Member => "badge badge--member",
    };

    rsx! {
        tr {
            td { "{row.id}" }
            td { "{row.username}" }
            td { "{row.first_name}" }
            td { "{row.last_name}" }
            td {
                span {
                    class: role_class,
                    if row.role == Role::Admin {
                        Icon { icon: FaCrown, width: 12, height: 12 }
                    }
                    {row.role.label()}
                }
            }
            td {
                {match row.created.clone() {
                    Some(cell) => rsx! { DateCellView { cell } },
                    None => rsx! { {MISSING} },
                }}
            }
            td {
                class: "row-actions",
                button {
                    class: "action-button",
                    r#type: "button",
                    title: "Düzenle",
                    onclick: move |_| on_edit.call(id),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "action-button action-button--danger",
                    r#type: "button",
                    title: "Sil",
                    disabled: !row.can_delete,
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}
