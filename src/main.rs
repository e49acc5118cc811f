//! prism CLI entry point.

mod cli;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let source = match std::fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.input.display());
            std::process::exit(1);
        }
    };

    let output = match prism_glsl::compile(&source) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, format!("{output}\n")) {
                eprintln!("Error writing {}: {e}", path.display());
                std::process::exit(1);
            }
        }
        None => println!("{output}"),
    }
}
