use anyhow::Context;
use log::LevelFilter;
use nightfire::{
    config::Config,
    controller::ThemeController,
    display::{self, TerminalDisplay},
    geo::{IpLocator, Locate},
    store::FileStore,
    sun::SunApi,
    theme::Theme,
};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_module("nightfire", LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::load()?;

    let store = FileStore::new(config.preference_path.clone());
    let display = TerminalDisplay::new(io::stdout());
    let locator: Option<Box<dyn Locate>> = config
        .geolocation
        .then(|| Box::new(IpLocator::new()) as Box<dyn Locate>);
    let mut controller = ThemeController::new(
        store,
        display,
        locator,
        Box::new(SunApi::new()),
    );

    // Leave the terminal how we found it, whichever way we exit
    ctrlc::set_handler(|| {
        restore_terminal();
        std::process::exit(0);
    })
    .context("Error setting termination handler")?;

    controller.resolve_and_apply();

    // The toggle control: one line of stdin per event. Anything unrecognized
    // flips the switch.
    let mut checked = controller.theme().is_some_and(Theme::toggle_checked);
    for line in io::stdin().lock().lines() {
        checked = match line?.trim() {
            "dark" | "on" => true,
            "light" | "off" => false,
            "quit" | "q" => break,
            _ => !checked,
        };
        controller.handle_toggle(checked);
    }

    restore_terminal();
    Ok(())
}

/// Put the terminal's own colors back
fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(display::RESET.as_bytes());
    let _ = stdout.flush();
}
