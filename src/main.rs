use std::process::ExitCode;

fn main() -> ExitCode {
    match circulant_inverse::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
