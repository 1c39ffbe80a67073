use std::error::Error;
use std::io;
use std::io::Write;
use std::process::ExitCode;
use subnet_calculator::logging::init_logging;
use subnet_calculator::output::banner;
use subnet_calculator::{run_repl, Config};

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("{e}");
    }
    log::info!("#Start main()");
    log::debug!("config={:?}", config);

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", banner())?;

    let summary = run_repl(io::stdin().lock(), &mut stdout, &config)?;
    log::info!("#End main() {:?}", summary);

    Ok(())
}
