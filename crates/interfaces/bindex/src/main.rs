#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = bindex_ui::run() {
        eprintln!("Bindex failed: {err}");
        std::process::exit(1);
    }
}
