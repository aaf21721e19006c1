mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;

use config::{load_config, KeySource};

#[derive(Parser)]
#[command(name = "g16", about = "Verify Groth16-style proofs over BN254")]
struct Cli {
    /// Print JSON to stdout instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Key file, overriding the configured one
    #[arg(long, global = true)]
    key: Option<PathBuf>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify a proof file
    ///
    /// Exits 0 when the proof is accepted, 1 when it is rejected and 2 when
    /// the proof, inputs or key cannot be decoded.
    Verify {
        /// JSON proof file with proof words and public inputs
        proof: PathBuf,
        /// Comma-separated public inputs, replacing the ones in the file
        #[arg(long, value_delimiter = ',')]
        inputs: Option<Vec<String>>,
    },
    /// Show the verification key in use
    Key,
    /// Verify the built-in reference proof
    Demo,
    /// Read or change ~/.g16/config.json
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Set a config value (key_path, pairing)
    Set {
        #[arg(value_name = "KEY")]
        name: String,
        value: String,
    },
    /// Clear key_path and fall back to the built-in key
    UnsetKey,
    /// Print the current config
    Show,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

const EXIT_REJECTED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn verdict_code(valid: bool) -> u8 {
    if valid {
        0
    } else {
        EXIT_REJECTED
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = load_config()?;
    let source = KeySource::resolve(cli.key.as_deref(), &config);

    let code = match cli.command {
        Cmd::Verify { proof, inputs } => {
            verdict_code(commands::verify::run(&source, &config, &proof, inputs.as_deref())?)
        }
        Cmd::Key => {
            commands::key::show(&source, &config)?;
            0
        }
        Cmd::Demo => verdict_code(commands::demo::run(&config)?),
        Cmd::Config { action } => {
            match action {
                ConfigCmd::Set { name, value } => commands::config::set(&name, &value)?,
                ConfigCmd::UnsetKey => commands::config::unset_key()?,
                ConfigCmd::Show => commands::config::show()?,
            }
            0
        }
    };
    Ok(code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use g16_types::files::ProofFile;
    use g16_types::{G1Point, G2Point, Proof, PublicInputs};
    use g16_verifier::demo_verifier;

    use crate::config::CliConfig;

    #[test]
    fn config_set_parses_alongside_global_key_flag() {
        let cli = Cli::try_parse_from(["g16", "config", "set", "pairing", "separated"]).unwrap();
        assert!(cli.key.is_none());
        match cli.command {
            Cmd::Config {
                action: ConfigCmd::Set { name, value },
            } => {
                assert_eq!(name, "pairing");
                assert_eq!(value, "separated");
            }
            _ => panic!("expected config set"),
        }

        let cli = Cli::try_parse_from(["g16", "--key", "k.json", "config", "set", "key_path", "/tmp/x.json"]).unwrap();
        assert_eq!(cli.key, Some(PathBuf::from("k.json")));
        assert!(matches!(
            cli.command,
            Cmd::Config { action: ConfigCmd::Set { ref name, .. } } if name == "key_path"
        ));
    }

    #[test]
    fn rejection_and_errors_exit_differently() {
        assert_eq!(verdict_code(true), 0);
        assert_eq!(verdict_code(false), EXIT_REJECTED);
        assert_ne!(EXIT_REJECTED, EXIT_ERROR);
    }

    #[test]
    fn verify_command_separates_rejection_from_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("key.json");
        let proof_path = dir.path().join("proof.json");
        let verifier = demo_verifier().unwrap();
        std::fs::write(&key_path, serde_json::to_string(&verifier.to_key_file()).unwrap()).unwrap();
        let proof = Proof::new(G1Point::generator(), G2Point::generator(), G1Point::generator());
        let file = ProofFile::new(&proof, &PublicInputs::from([2, 3, 4]));
        std::fs::write(&proof_path, serde_json::to_string(&file).unwrap()).unwrap();

        let source = KeySource::File(key_path);
        let config = CliConfig::default();
        let verify = |inputs: Option<&[String]>| commands::verify::run(&source, &config, &proof_path, inputs);

        assert!(verify(None).unwrap());
        let wrong: Vec<String> = ["2", "3", "5"].map(String::from).to_vec();
        assert!(!verify(Some(&wrong)).unwrap());
        let short: Vec<String> = ["2", "3"].map(String::from).to_vec();
        assert!(verify(Some(&short)).is_err());
    }
}
