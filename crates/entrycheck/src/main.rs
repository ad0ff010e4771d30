mod logging; // Declare the logging module
mod report;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use entrycheck_core::constants::{APP_NAME, MODULE_PATH};
use entrycheck_core::{DlopenLoader, EntryRunner};
use log::{debug, info};

fn main() -> ExitCode {
    logging::init();
    info!("{} checking {}", APP_NAME, MODULE_PATH);

    let mut runner = EntryRunner::new(DlopenLoader::new());
    let outcome = runner.run(Path::new(MODULE_PATH));
    match &outcome {
        Ok(stage) => info!("Finished at stage {}", stage),
        Err(e) => debug!("{} failed: {}", APP_NAME, e),
    }

    let status = report::report(&outcome, &mut io::stdout(), &mut io::stderr()).unwrap_or(1);
    ExitCode::from(status)
}
