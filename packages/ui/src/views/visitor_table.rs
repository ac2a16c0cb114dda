use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaDoorOpen, FaPenToSquare, FaTrash};
use dioxus_free_icons::Icon;

use store::table::VISITOR_COLUMNS;
use store::{text, DateCell, ExitCell, TableView, VisitorRow};

#[component]
pub fn VisitorTable(
    view: TableView<VisitorRow>,
    on_edit: EventHandler<u64>,
    on_exit: EventHandler<u64>,
    on_delete: EventHandler<u64>,
) -> Element {
    let columns = VISITOR_COLUMNS.len();

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    for column in VISITOR_COLUMNS {
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
                            VisitorTableRow {
                                key: "{row.id}",
                                row: row.clone(),
                                on_edit,
                                on_exit,
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
fn VisitorTableRow(
    row: VisitorRow,
    on_edit: EventHandler<u64>,
    on_exit: EventHandler<u64>,
    on_delete: EventHandler<u64>,
) -> Element {
    let id = row.id;

    rsx! {
        tr {
            td { "{row.id}" }
            td { "{row.first_name}" }
            td { "{row.last_name}" }
            td { "{row.company}" }
            td { "{row.plate}" }
            td { span { class: "type-badge", "{row.type_label}" } }
            td { DateCellView { cell: row.entry.clone() } }
            td {
                {match row.exit.clone() {
                    ExitCell::Active => rsx! { span { class: "badge badge--active", {text::ACTIVE_BADGE} } },
                    ExitCell::Left(cell) => rsx! { DateCellView { cell } },
                }}
            }
            td { "{row.creator}" }
            td {
                class: "row-actions",
                button {
                    class: "action-button",
                    r#type: "button",
                    title: "Düzenle",
                    onclick: move |_| on_edit.call(id),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                if row.can_exit() {
                    button {
                        class: "action-button action-button--exit",
                        r#type: "button",
                        title: "Çıkış Yap",
                        onclick: move |_| on_exit.call(id),
                        Icon { icon: FaDoorOpen, width: 14, height: 14 }
                    }
                }
                button {
                    class: "action-button action-button--danger",
                    r#type: "button",
                    title: "Sil",
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

/// Date on the first line, time in small print beneath.
#[component]
pub fn DateCellView(cell: DateCell) -> Element {
    rsx! {
        div { "{cell.date}" }
        if let Some(time) = cell.time {
            small { class: "cell-time", "{time}" }
        }
    }
}
