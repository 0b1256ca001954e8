use std::process::ExitCode;

fn main() -> ExitCode {
    match jsonmend::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
