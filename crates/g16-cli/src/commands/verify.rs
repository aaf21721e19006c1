use std::path::Path;

use anyhow::Result;
use g16_types::files::ProofFile;
use g16_types::word::fr_from_str;
use g16_types::PublicInputs;

use crate::config::{load_verifier, read_json, CliConfig, KeySource};
use crate::output;

/// Returns whether the proof was accepted.
pub fn run(source: &KeySource, config: &CliConfig, proof_path: &Path, inputs: Option<&[String]>) -> Result<bool> {
    let verifier = load_verifier(source, config)?;
    let file: ProofFile = read_json(proof_path)?;

    let (proof, file_inputs) = file.decode().map_err(|e| {
        output::fail_with_hint(
            &format!("malformed proof file {}: {e}", proof_path.display()),
            "points must be on BN254 and in the prime-order subgroup; G2 words are [x_im, x_re, y_im, y_re]",
        )
    })?;

    let public_inputs = match inputs {
        Some(raw) => {
            let values = raw
                .iter()
                .map(|s| fr_from_str(s))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    output::fail_with_hint(
                        &format!("invalid public input: {e}"),
                        "inputs are unsigned and below the group order; put negative inputs in a '-' slot",
                    )
                })?;
            PublicInputs::new(values)
        }
        None => file_inputs,
    };

    let valid = verifier.verify(&proof, &public_inputs).map_err(|e| {
        output::fail_with_hint(
            &format!("cannot verify: {e}"),
            &format!(
                "the key expects {} inputs with layout {}",
                verifier.folder().arity(),
                verifier.folder().layout()
            ),
        )
    })?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "valid": valid,
            "key": source.describe(),
            "pairing": verifier.mode().to_string(),
            "inputs": public_inputs.len(),
        }));
    } else {
        output::label("key", &source.describe());
        output::label("pairing", &verifier.mode().to_string());
        output::verdict("proof", valid);
    }
    Ok(valid)
}
