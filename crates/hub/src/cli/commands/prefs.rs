//! Implementation of `hub prefs`.

use std::process::ExitCode;

use hub_config::Preferences;

use crate::cli::{
    args::PrefsCommand,
    context::preferences_path_or_failure,
    output::{dim, subheader, success},
};

/// Shows the saved preferences, applying any requested changes first.
pub fn run(cmd: &PrefsCommand) -> ExitCode {
    let path = match preferences_path_or_failure() {
        Ok(p) => p,
        Err(code) => return code,
    };
    let mut prefs = match Preferences::load(&path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.changes_anything() {
        if cmd.toggle_theme {
            prefs.theme = prefs.theme.toggle();
        }
        prefs.font_size = prefs.font_size.change(cmd.font_delta());

        if let Err(e) = prefs.save(&path) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
        println!("{}", success("Preferences saved."));
    }

    println!("{}", subheader("Preferences:"));
    println!("   theme      {}", prefs.theme.as_str());
    println!(
        "   font size  {} {}",
        prefs.font_size.step(),
        dim(&format!("({})", prefs.font_size.css_class()))
    );
    println!("   {}", dim(&path.display().to_string()));

    ExitCode::SUCCESS
}
