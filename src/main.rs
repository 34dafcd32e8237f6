pub mod base58;
pub mod base_common;
pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;
pub mod output;

use self::{chronometer::Chronometer, configuration::Configuration, error::Error, logger::Logger};
use std::{env, process};

fn run(configuration: &Configuration, logger: &Logger) -> Result<String, Box<dyn std::error::Error>> {
    let input = configuration.input();
    logger.log(format!("Decoding {} characters", input.chars().count()));
    let bytes = base58::decode(input)?;
    logger.log(format!("Decoded {} bytes", bytes.len()));
    Ok(output::render(&bytes, configuration.format())?)
}

fn main() {
    let configuration = match Configuration::from_args(env::args().skip(1)) {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("{}", error.message());
            process::exit(2);
        }
    };

    let logger = Logger::new(configuration.verbose());

    match run(&configuration, &logger) {
        Ok(output) => print!("{}", output),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
