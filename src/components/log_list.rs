//! Log List Component
//!
//! One row per received message, in arrival order.

use leptos::*;

use crate::state::log::MessageLog;

/// Renders every message in `log`; renders nothing while the log is empty
#[component]
pub fn LogList(
    #[prop(into)]
    log: Signal<MessageLog>,
) -> impl IntoView {
    view! {
        <Show when=move || log.with(|log| !log.is_empty()) fallback=|| ()>
            <div class="log-list flex flex-col gap-2 rounded">
                // keyed by position, so repeated payloads stay separate rows
                <For
                    each=move || 0..log.with(MessageLog::len)
                    key=|position| *position
                    children=move |position| view! { <LogRow log=log position=position /> }
                />
            </div>
        </Show>
    }
}

/// A row never changes once rendered: positions in the log are stable
#[component]
fn LogRow(log: Signal<MessageLog>, position: usize) -> impl IntoView {
    let text = log.with_untracked(|log| log.get(position).map(|m| m.text().to_string()));

    view! {
        <p class="log-row p-4 rounded border border-transparent hover:border-primary-700">
            {text}
        </p>
    }
}
