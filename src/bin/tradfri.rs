use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use convert_case::{Case, Casing};
use serde::Serialize;
use strum::IntoEnumIterator;
use tradfri_rest::{
    models::{Attribute, Device, Group},
    translate::{to_device_response, to_group_response},
    Error, Result,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Tradfri wire model CLI", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(short, long)]
    /// List the gateway attribute codes
    codes: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the REST response for a gateway device JSON document
    Device {
        /// Path to the gateway JSON
        file: PathBuf,
    },

    /// Print the REST response for a gateway group JSON document
    Group {
        /// Path to the gateway JSON
        file: PathBuf,
    },
}

fn print_codes() {
    for attr in Attribute::iter() {
        println!(
            "{:>6} => {}",
            attr.code(),
            attr.name().from_case(Case::Pascal).to_case(Case::Title)
        );
    }
}

fn read(file: &Path) -> Result<String> {
    fs::read_to_string(file).map_err(|e| Error::io("read", e))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(Error::JsonDump)?;
    println!("{out}");
    Ok(())
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Device { file } => {
            let device: Device = serde_json::from_str(&read(file)?).map_err(Error::JsonLoad)?;
            print_json(&to_device_response(&device))
        }
        Command::Group { file } => {
            let group: Group = serde_json::from_str(&read(file)?).map_err(Error::JsonLoad)?;
            print_json(&to_group_response(&group))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.codes {
        print_codes();
        return ExitCode::SUCCESS;
    }

    let command = match &args.command {
        Some(command) => command,
        None => {
            eprintln!("A device or group file is required!");
            return ExitCode::FAILURE;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
