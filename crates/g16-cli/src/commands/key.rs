use anyhow::Result;
use g16_types::word::word_to_hex;
use g16_verifier::InputBasis;

use crate::config::{load_verifier, CliConfig, KeySource};
use crate::output;

const POINT_NAMES: [(&str, usize, usize); 4] = [
    ("alpha1", 0, 2),
    ("beta2", 2, 6),
    ("gamma2", 6, 10),
    ("delta2", 10, 14),
];

pub fn show(source: &KeySource, config: &CliConfig) -> Result<()> {
    let verifier = load_verifier(source, config)?;
    let words: Vec<String> = verifier.vk().encode().iter().map(word_to_hex).collect();
    let basis = match verifier.folder().basis() {
        InputBasis::Generator => "generator".to_string(),
        InputBasis::Circuit { coefficients, .. } => format!("circuit ({} IC points + constant)", coefficients.len()),
    };

    if output::is_json() {
        let mut points = serde_json::Map::new();
        for (name, from, to) in POINT_NAMES {
            points.insert(name.into(), serde_json::Value::from(words[from..to].to_vec()));
        }
        output::json_output(serde_json::json!({
            "source": source.describe(),
            "points": points,
            "signs": verifier.folder().layout().to_string(),
            "basis": basis,
        }));
    } else {
        output::label("source", &source.describe());
        for (name, from, to) in POINT_NAMES {
            output::label(name, &words[from..to].join(", "));
        }
        output::label("signs", &verifier.folder().layout().to_string());
        output::label("basis", &basis);
        output::info("G2 words are [x_im, x_re, y_im, y_re]");
    }
    Ok(())
}
