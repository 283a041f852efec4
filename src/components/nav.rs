//! Navigation Components
//!
//! Top app bar and the slide-out drawer with the dashboard menu.

use leptos::*;

/// A drawer menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// Drawer menu, top to bottom
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry { key: "home", label: "Home" },
    NavEntry { key: "filters", label: "Filter Management" },
    NavEntry { key: "jobs", label: "Job Management" },
    NavEntry { key: "config", label: "Config Settings" },
];

/// Header bar with the menu button and title
#[component]
pub fn AppBar(
    #[prop(into)]
    title: String,
    drawer_open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <header class="app-bar bg-primary-600 text-white shadow flex flex-row items-center gap-8 p-4">
            <button
                type="button"
                class="menu-button text-3xl leading-none rounded p-2 hover:bg-primary-700 transition-colors"
                aria-label="menu"
                on:click=move |_| drawer_open.set(true)
            >
                "☰"
            </button>
            <h1 class="text-4xl font-medium">{title}</h1>
        </header>
    }
}

/// Slide-out drawer. Clicking the backdrop or an entry closes it.
#[component]
pub fn NavDrawer(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="drawer-backdrop fixed inset-0 bg-black/40 z-40"
                on:click=move |_| open.set(false)
            />
            <nav class="nav-drawer fixed top-0 left-0 h-full bg-white text-gray-900 shadow-xl z-50">
                <ul class="p-0">
                    {NAV_ENTRIES
                        .iter()
                        .map(|entry| view! { <NavItem entry=*entry open=open /> })
                        .collect_view()}
                </ul>
            </nav>
        </Show>
    }
}

/// Placeholder menu item
#[component]
fn NavItem(entry: NavEntry, open: RwSignal<bool>) -> impl IntoView {
    view! {
        <li class="nav-entry p-0" data-key=entry.key>
            <button
                type="button"
                class="w-64 text-left px-4 py-3 hover:bg-gray-100 transition-colors"
                on:click=move |_| open.set(false)
            >
                {entry.label}
            </button>
        </li>
    }
}
