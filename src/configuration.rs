use crate::Error;
use std::str::FromStr;

pub const DEFAULT_INPUT: &str = "CPo1f4ZNjCsnE9WEFUmd3oYKzo43ANejAFpWF44R3fqjv";

pub const USAGE: &str = "Usage: base58-decode [--format list|hex|json] [--quiet] [INPUT]";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    List,
    Hex,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "list" => Ok(Format::List),
            "hex" => Ok(Format::Hex),
            "json" => Ok(Format::Json),
            _ => Err(Error::new(format!("Invalid format {}", value))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    input: String,
    format: Format,
    verbose: bool,
}

fn value(option: &str, args: &mut impl Iterator<Item = String>) -> Result<String, Error> {
    args.next().ok_or_else(|| Error::new(format!("Missing value for {}", option)))
}

impl Configuration {
    /// Builds the configuration from the command-line arguments, program name excluded.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, Error> {
        let mut args = args.into_iter();
        let mut input = None;
        let mut format = Format::List;
        let mut verbose = true;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-f" | "--format" => format = value(&arg, &mut args)?.parse()?,
                "-q" | "--quiet" => verbose = false,
                option if option.starts_with("--format=") => format = option["--format=".len()..].parse()?,
                option if option.starts_with('-') && option.len() > 1 => {
                    return Err(Error::new(format!("Unknown option {}\n{}", option, USAGE)));
                }
                _ if input.is_some() => return Err(Error::new(format!("Unexpected argument {}\n{}", arg, USAGE))),
                _ => input = Some(arg),
            }
        }
        Ok(Self {
            input: input.unwrap_or_else(|| DEFAULT_INPUT.to_string()),
            format,
            verbose,
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
