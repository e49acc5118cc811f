//! Command-line interface for the prism transpiler.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "TypeScript-to-GLSL shader transpiler", long_about = None)]
pub struct Cli {
    /// TypeScript source file to transpile
    pub input: PathBuf,

    /// Write the GLSL output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
