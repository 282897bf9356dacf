//! Browser entry point: panic hook, console logger, mount.

#[cfg(target_arch = "wasm32")]
fn main() {
    use automator_ui::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting dashboard");
    leptos::mount::mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Browser-only binary; nothing runs on native targets.
}
