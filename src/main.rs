use std::process::ExitCode;
use ws_test_console::cli;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli_args = cli::parse_args();

    // Print the requested line
    match cli::run(cli_args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
