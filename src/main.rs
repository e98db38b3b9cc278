//! cmodule's main application entry point.
//! Parses the command line, configures logging and generates the module.

use cmodule::{
    cli::{get_args, Action, Args},
    error::{default_error_handler, Result},
    processor::generate_module,
};

/// Main application entry point.
fn main() {
    let args = match get_args() {
        Ok(args) => args,
        Err(err) => default_error_handler(err),
    };

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    match args.action()? {
        Action::New => {
            let target = generate_module(args.module_path()?, &args.config)?;
            println!("created: '{}'", target.header);
            println!("created: '{}'", target.source);
        }
    }
    Ok(())
}
