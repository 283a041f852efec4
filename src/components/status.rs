//! Stream Status Badge
//!
//! Passive indicator of the log stream's connection health.

use leptos::*;

use crate::state::stream::LinkStatus;

/// Text and dot colour classes for a status
fn badge_classes(status: LinkStatus) -> (&'static str, &'static str) {
    match status {
        LinkStatus::Connecting => ("text-gray-500", "bg-gray-400"),
        LinkStatus::Live => ("text-green-600", "bg-green-500 pulse"),
        LinkStatus::Lost => ("text-secondary-500", "bg-secondary-500"),
    }
}

#[component]
pub fn StreamStatusBadge(
    #[prop(into)]
    status: Signal<LinkStatus>,
) -> impl IntoView {
    view! {
        <span class=move || format!(
            "stream-status flex items-center space-x-1 text-sm {}",
            badge_classes(status.get()).0
        )>
            <span class=move || format!("w-2 h-2 rounded-full {}", badge_classes(status.get()).1) />
            <span>{move || status.get().label()}</span>
        </span>
    }
}
