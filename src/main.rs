#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod util;

#[cfg(windows)]
mod helpers;
#[cfg(windows)]
mod tray;
#[cfg(windows)]
mod win;

#[cfg(windows)]
fn main() -> windows::core::Result<()> {
    util::tracing::init_tracing();

    let Some(_guard) = helpers::single_instance_guard()? else {
        tracing::info!("another instance is already running");
        return Ok(());
    };

    win::run()
}

#[cfg(not(windows))]
fn main() {
    util::tracing::init_tracing();
    eprintln!("di-switcher only runs on Windows");
    std::process::exit(1);
}

#[cfg(all(test, windows))]
mod tests;
