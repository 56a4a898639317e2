//! Sketch applet export tool.
//!
//! Builds the selected sketch projects and packages each as a runnable
//! applet bundle with proper error reporting.

use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match sketch_export::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}
