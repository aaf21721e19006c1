use anyhow::Result;
use g16_types::{G1Point, G2Point, Proof, PublicInputs};
use g16_verifier::{demo_verifier, DEMO_INPUTS, DEMO_INPUT_SIGNS};

use crate::config::CliConfig;
use crate::output;

/// Verify the built-in reference proof: A1 = C1 = G1, B2 = G2 with inputs
/// (2, 3, 4) under layout `++-`.
pub fn run(config: &CliConfig) -> Result<bool> {
    let verifier = demo_verifier()?.with_mode(config.pairing);
    let proof = Proof::new(G1Point::generator(), G2Point::generator(), G1Point::generator());
    let valid = verifier.verify(&proof, &PublicInputs::from(DEMO_INPUTS))?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "valid": valid,
            "inputs": DEMO_INPUTS,
            "signs": DEMO_INPUT_SIGNS,
            "pairing": verifier.mode().to_string(),
        }));
    } else {
        output::label("equation", "e(-A1,B2)·e(alpha1,beta2)·e(X1,gamma2)·e(C1,delta2) = 1");
        output::label(
            "inputs",
            &format!("x1={} x2={} x3={} ({DEMO_INPUT_SIGNS})", DEMO_INPUTS[0], DEMO_INPUTS[1], DEMO_INPUTS[2]),
        );
        output::verdict("demo proof", valid);
    }
    Ok(valid)
}
