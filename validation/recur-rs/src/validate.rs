use recur_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    definition: DefinitionData,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct DefinitionData {
    offsets: Vec<i64>,
    coefficients: Vec<f64>,
    seed: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    values: Vec<f64>,
    ratios: Vec<f64>,
    phi_gap: f64,
}

const TERMS: usize = 20;
const DEEP_INDEX: i64 = 50;

fn main() -> Result<(), Box<dyn Error>> {
    let output_dir = Path::new("../output/recur_rs");
    fs::create_dir_all(output_dir)?;

    let cases = vec![
        ValidationData {
            name: "fibonacci".to_string(),
            notes: "two-term addition relation, seed [1, 1]".to_string(),
            definition: DefinitionData {
                offsets: vec![-1, -2],
                coefficients: vec![1.0, 1.0],
                seed: vec![1.0, 1.0],
            },
            result: ResultData::default(),
        },
        ValidationData {
            name: "three_term".to_string(),
            notes: "value[n] = value[n-1] - 2*value[n-3], seed [1, 1, 1]".to_string(),
            definition: DefinitionData {
                offsets: vec![-1, -3],
                coefficients: vec![1.0, -2.0],
                seed: vec![1.0, 1.0, 1.0],
            },
            result: ResultData::default(),
        },
    ];

    for mut case in cases {
        println!("Processing case '{}'", case.name);
        run_case(&mut case)?;

        let output_path = output_dir.join(format!("{}.json", case.name));
        let output_json = serde_json::to_string_pretty(&case)?;
        fs::write(output_path, output_json)?;
    }

    Ok(())
}

fn run_case(case: &mut ValidationData) -> Result<(), Box<dyn Error>> {
    let mut engine = Recurrence::builder()
        .offsets(&case.definition.offsets)
        .coefficients(&case.definition.coefficients)
        .seed(&case.definition.seed)
        .build()?;

    for index in 0..TERMS {
        case.result.values.push(engine.evaluate(index as i64)?);
    }
    for index in 0..TERMS {
        case.result
            .ratios
            .push(ratio_rounded(&mut engine, index as i64, 5)?);
    }

    // Gap between the deep consecutive ratio and the golden ratio; only
    // meaningful for the two-term case but cheap to record everywhere.
    let phi: f64 = golden_ratio();
    case.result.phi_gap = (ratio(&mut engine, DEEP_INDEX)? - phi).abs();

    println!(
        "  first {} terms computed, cache holds {} entries, phi gap {:.3e}",
        TERMS,
        engine.count(),
        case.result.phi_gap
    );

    Ok(())
}
