use dioxus::prelude::*;

use store::Stats;

/// The four counters above the visitor table.
#[component]
pub fn StatsCards(stats: Stats) -> Element {
    let cards = [
        ("Bugünkü Ziyaretçi", stats.daily),
        ("Bu Ayki Ziyaretçi", stats.monthly),
        ("Toplam Ziyaretçi", stats.total),
        ("İçerideki Ziyaretçi", stats.active),
    ];

    rsx! {
        div {
            class: "stats-cards",
            for (label, value) in cards {
                div {
                    key: "{label}",
                    class: "stats-card",
                    span { class: "stats-value", "{value}" }
                    span { class: "stats-label", "{label}" }
                }
            }
        }
    }
}
