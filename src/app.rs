//! App Root Component
//!
//! Dashboard shell: app bar, navigation drawer and the live log panel.

use leptos::*;

use crate::components::{AppBar, NavDrawer};
use crate::config::DashboardConfig;
use crate::pages::LogStreamView;

/// Root application component
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let title = config.ui.title.clone();
    provide_context(config);

    let drawer_open = create_rw_signal(false);

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 text-gray-900 font-montserrat">
            <AppBar title=title drawer_open=drawer_open />

            <main class="flex-1 p-4">
                <LogStreamView />
            </main>

            <NavDrawer open=drawer_open />
        </div>
    }
}
