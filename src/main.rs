//! FSM Management Dashboard
//!
//! Entry point of the WASM bundle.

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if let Err(e) = fsm_dashboard::start() {
        web_sys::console::error_1(&format!("Dashboard failed to start: {}", e).into());
    }
}
