use std::process::ExitCode;

use svgpoly::cli::{get_config, run};

fn main() -> ExitCode {
    env_logger::init();

    match get_config().and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("svgpoly: {e}");
            ExitCode::FAILURE
        }
    }
}
