//! horn - terminal front end for the horn filter
//!
//! Run with: cargo run

mod app;
mod ui;

use app::App;
use horn_dsp::preset;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    App::new().preset(preset::slow_sweep()).run()
}
