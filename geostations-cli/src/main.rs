//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = geostations_cli::run() {
        eprintln!("geostations: {err}");
        std::process::exit(1);
    }
}
