//! Command-line interface for `extsync`.
//!
//! Exports an editor's installed extensions, `settings.json` and
//! `keybindings.json` into the current directory, and replays them on
//! another machine.

#![deny(unsafe_code)]

mod app;
mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    app::run()
}
