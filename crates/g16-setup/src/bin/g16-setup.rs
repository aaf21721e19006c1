// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Offline constant derivation: turns setup and proof scalars into the hex
//! words a deployed verifier hardcodes and the JSON files `g16` reads.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use clap::{Args, Parser, Subcommand};
use g16_setup::report::{KeyReport, ProofReport};
use g16_setup::{build_proof, build_verification_key, demo_fixture, ProofScalars, SetupScalars};
use g16_types::files::ProofFile;
use g16_types::word::{fr_from_str, fr_to_word, word_to_hex};
use g16_types::{PublicInputs, Scalar};
use g16_verifier::{InputLayout, PublicInputFolder, Verifier};
use serde::Serialize;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "g16-setup", about = "Derive verification-key constants and proof fixtures")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Derive a verification key from setup scalars
    Key(KeyArgs),
    /// Build a proof fixture from proof scalars
    Proof(ProofArgs),
    /// Print (and optionally write) the reference demo constants
    Demo {
        /// Directory to write key.json and proof.json into
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Args)]
struct KeyArgs {
    #[arg(long, default_value = "1")]
    alpha: String,
    #[arg(long, default_value = "1")]
    beta: String,
    #[arg(long, default_value = "1")]
    gamma: String,
    /// delta2 is derived as -(delta·G2)
    #[arg(long, default_value = "1")]
    delta: String,
    /// Draw all four scalars from a seeded RNG instead
    #[arg(long)]
    seed: Option<u64>,
    /// Public-input layout, one '+' or '-' per input
    #[arg(long, default_value = "++-", allow_hyphen_values = true)]
    signs: String,
    /// Write the key file here
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct ProofArgs {
    #[arg(long, default_value = "1")]
    a: String,
    #[arg(long, default_value = "1")]
    b: String,
    #[arg(long, default_value = "1")]
    c: String,
    /// Comma-separated public inputs (magnitudes)
    #[arg(long, value_delimiter = ',', default_value = "2,3,4")]
    inputs: Vec<String>,
    /// Write the proof file here
    #[arg(long)]
    out: Option<PathBuf>,
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

fn scalar(name: &str, s: &str) -> Result<Scalar> {
    fr_from_str(s).with_context(|| format!("invalid {name}: {s}"))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
    info!(path = %path.display(), "wrote file");
    Ok(())
}

fn print_lines(title: &str, lines: &[(String, String)]) {
    println!("{title}");
    for (name, value) in lines {
        println!("  {name}: {value}");
    }
}

fn run_key(args: KeyArgs, json: bool) -> Result<()> {
    let scalars = match args.seed {
        Some(seed) => SetupScalars::random(&mut StdRng::seed_from_u64(seed)),
        None => SetupScalars {
            alpha: scalar("alpha", &args.alpha)?,
            beta: scalar("beta", &args.beta)?,
            gamma: scalar("gamma", &args.gamma)?,
            delta: scalar("delta", &args.delta)?,
        },
    };
    let layout: InputLayout = args.signs.parse().context("invalid --signs")?;
    let vk = build_verification_key(&scalars);
    let verifier = Verifier::new(vk, PublicInputFolder::generator(layout));

    if let Some(out) = &args.out {
        write_json(out, &verifier.to_key_file())?;
    }
    let report = KeyReport::from(&vk);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_lines("Verification key:", &report.lines());
        println!("  words: {}", vk.to_hex_words().join(","));
    }
    Ok(())
}

fn run_proof(args: ProofArgs, json: bool) -> Result<()> {
    let scalars = ProofScalars {
        a: scalar("a", &args.a)?,
        b: scalar("b", &args.b)?,
        c: scalar("c", &args.c)?,
    };
    let inputs = args
        .inputs
        .iter()
        .map(|s| scalar("input", s))
        .collect::<Result<Vec<_>>>()?;
    let inputs = PublicInputs::new(inputs);
    let proof = build_proof(&scalars);

    if let Some(out) = &args.out {
        write_json(out, &ProofFile::new(&proof, &inputs))?;
    }
    let report = ProofReport::new(&proof, &inputs);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_lines("Proof:", &report.lines());
    }
    Ok(())
}

fn run_demo(out_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let demo = demo_fixture();
    let vk = demo.vk();
    let proof = demo.proof();
    let inputs = demo.public_inputs();
    let verifier = demo.verifier();
    let valid = verifier.verify(&proof, &inputs)?;

    if let Some(dir) = &out_dir {
        write_json(&dir.join("key.json"), &verifier.to_key_file())?;
        write_json(&dir.join("proof.json"), &ProofFile::new(&proof, &inputs))?;
    }

    // x3 as a raw scalar: only valid in a positive slot
    let x3_pre_negated = word_to_hex(&fr_to_word(&-Scalar::from(demo.inputs[2])));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "vk": KeyReport::from(&vk),
                "proof": ProofReport::new(&proof, &inputs),
                "signs": demo.layout.to_string(),
                "x3_pre_negated": x3_pre_negated,
                "valid": valid,
            }))?
        );
    } else {
        print_lines("Verification key:", &KeyReport::from(&vk).lines());
        print_lines("Proof:", &ProofReport::new(&proof, &inputs).lines());
        println!("  signs: {}", demo.layout);
        println!("  x3 pre-negated (positive slot only): {x3_pre_negated}");
        println!("verifies: {valid}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Cmd::Key(args) => run_key(args, cli.json),
        Cmd::Proof(args) => run_proof(args, cli.json),
        Cmd::Demo { out_dir } => run_demo(out_dir, cli.json),
    }
}
