//! mermaid2drawio CLI - Convert Mermaid diagrams to draw.io XML

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();
    let verbose = cli_args.verbose;

    // Logging is initialized inside run() once the flags are known
    let mut app = cli::ConvertApp::new();

    if let Err(e) = app.run(cli_args) {
        if verbose {
            eprintln!("Error: {:#}", e);
        } else {
            tracing::error!(error = %e, "Conversion failed");
        }
        std::process::exit(1);
    }
}
