//! File Movement Logs
//!
//! Live view of the log stream. Each mounted instance opens its own
//! connection and releases it when the owning reactive scope is disposed.

use leptos::*;

use crate::components::{LogList, StreamStatusBadge};
use crate::config::{DashboardConfig, Endpoint};
use crate::state::{LogFeed, LogStream, StreamId, Transport, WebSocketTransport};

/// Live log view for the configured endpoint
#[component]
pub fn LogStreamView() -> impl IntoView {
    let endpoint = stream_endpoint();
    let feed = LogFeed::new();
    attach_stream(&WebSocketTransport, &endpoint, feed);

    view! {
        <section class="log-stream flex flex-col w-full h-full gap-4">
            <div class="flex items-center justify-between">
                <h2 class="text-3xl">"File Movement Logs"</h2>
                <div class="flex items-center space-x-4">
                    <span class="text-sm text-gray-500">
                        {move || feed.last_received_label()}
                    </span>
                    <StreamStatusBadge status=feed.status />
                </div>
            </div>
            <div class="bg-white rounded shadow p-4 flex flex-col gap-4">
                <LogList log=feed.log />
            </div>
        </section>
    }
}

/// Open a stream into `feed` and tie its release to the current reactive
/// owner. Attached at the root owner, the stream lives as long as the page.
pub fn attach_stream<T>(transport: &T, endpoint: &Endpoint, feed: LogFeed) -> StreamId
where
    T: Transport,
    T::Handle: 'static,
{
    let stream = LogStream::open(transport, endpoint, feed);
    let id = stream.id();
    on_cleanup(move || drop(stream));
    id
}

/// Endpoint from the provided config, or the compiled-in default.
/// The provided config was already validated by `DashboardConfig::load_embedded`.
fn stream_endpoint() -> Endpoint {
    use_context::<DashboardConfig>()
        .and_then(|config| config.endpoint().ok())
        .unwrap_or_default()
}
