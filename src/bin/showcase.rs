//! `showcase` — tintrun demonstration binary
//!
//! Rebuilds the classic colored-text-generator welcome message, applies a
//! few style commands, and prints the terminal preview alongside the markup
//! a chat client would consume.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin showcase
//! ```

use tintrun::{LogLevel, Rgb, Session, StyleChange, set_log_callback};

fn main() -> tintrun::Result<()> {
    set_log_callback(|level, message| {
        if level == LogLevel::Info {
            eprintln!("[showcase] {message}");
        }
    });

    let mut session = Session::with_text("Welcome to Discord Colored Text Generator!");

    // "Discord" in blurple, "Colored" in light blue, bold "Welcome".
    session.set_selection(11, 18);
    session.apply(StyleChange::Foreground(Rgb::from_hex("#7289da")?));
    session.set_selection(19, 26);
    session.apply(StyleChange::Foreground(Rgb::from_hex("#00aaff")?));
    session.set_selection(0, 7);
    session.apply(StyleChange::ToggleBold);

    println!("preview:");
    println!("  {}", session.preview());
    println!();
    println!("markup:");
    println!("  {}", session.export());

    Ok(())
}
