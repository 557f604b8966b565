//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::{config::Config, dir::SigninDirectory};

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(SigninDirectory),
    AuthUrl(String),
}

/// Parse command-line arguments.
///
/// # Arguments
/// - `args`: Command-line arguments (including program name at args[0])
/// - `version`: Version to display for --version flag
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("signin-gui");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of signin datadir
    --auth-url <URL>    Base url of the authentication service
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--datadir" => {
                let a = iter.next().ok_or("missing arg to --datadir")?;
                res.push(Arg::DatadirPath(SigninDirectory::new(PathBuf::from(a))));
            }
            "--auth-url" => {
                let a = iter.next().ok_or("missing arg to --auth-url")?;
                res.push(Arg::AuthUrl(a.clone()));
            }
            other => return Err(format!("unknown argument '{}'", other).into()),
        }
    }

    Ok(res)
}

/// Convert parsed command-line arguments to a Config.
pub fn args_to_config(args: &[Arg]) -> Result<Config, Box<dyn Error>> {
    let mut datadir = None;
    let mut auth_url = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(path) if datadir.is_none() => datadir = Some(path.clone()),
            Arg::AuthUrl(url) if auth_url.is_none() => auth_url = Some(url.clone()),
            _ => return Err("Unknown args combination".into()),
        }
    }

    let datadir = match datadir {
        Some(datadir) => datadir,
        None => SigninDirectory::new_default()?,
    };
    Ok(Config::new(datadir, auth_url))
}
