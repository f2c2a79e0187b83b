//! CSR entry point: panic hook, console logging, and the root mount.

use phobo_client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("mounting Pho Bo client");
    leptos::mount::mount_to_body(App);
}
