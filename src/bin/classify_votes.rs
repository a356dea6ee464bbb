//! Classifies US House Representatives from a tab-delimited
//! voting-record file:
//! each line holds an identifier, a single-character party label,
//! and a string of single-character votes.
use std::env;
use std::process::ExitCode;

use colored::Colorize;

use sapling::prelude::*;

const CONSOLE_WIDTH: usize = 80;
const TUNING_STRIDE: usize = 4;
const FOLD_SIZE: usize = 1;


fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!(" usage: classify_votes path/to/records.tsv");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".bold().red());
            ExitCode::FAILURE
        },
    }
}


fn run(path: &str) -> Result<(), SaplingError> {
    let records = RecordReader::new().file(path).read()?;

    println!("I found the following labels in the dataset:");
    println!("{:?}\n", records.labels());
    println!("I found the following feature values in the dataset:");
    println!("{:?}\n", records.feature_values());

    let tree = DecisionTreeBuilder::new(&records)
        .tuning(Tuning::Stride(TUNING_STRIDE))
        .build()?;

    let estimate = CrossValidation::new(&records)
        .fold_size(FOLD_SIZE)
        .tuning(Tuning::Stride(TUNING_STRIDE))
        .run()?;

    let line = "-".repeat(CONSOLE_WIDTH);
    println!("I have induced the following tree from your data:");
    println!("{line}");
    println!("{tree}");
    println!("{line}");
    println!("with estimated accuracy: {estimate}\n");

    Ok(())
}
