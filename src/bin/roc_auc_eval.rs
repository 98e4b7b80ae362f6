//! Evaluate ROC AUC for scores and labels stored in a JSON file.
//!
//! The input file holds `{"scores": [...], "labels": [...]}` where each value
//! is a flat array or an array of rows. Without `--config`, `roc_auc.toml` in
//! the working directory is used when present. Command-line flags override the
//! file.

use anyhow::{bail, Context, Result};
use clap::Parser;
use ndarray::{Array1, Array2, ArrayD};
use roc_auc_rust::{AucResult, ConfigBuilder, RocAucConfig, RocAucMetric, DEFAULT_CONFIG_FILE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "roc_auc_eval")]
#[command(version, about = "Compute ROC AUC from a JSON file of scores and labels", long_about = None)]
struct Cli {
    /// JSON file with `scores` and `labels`
    input: PathBuf,

    /// Configuration file (.toml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Averaging policy: macro, weighted, micro or none
    #[arg(long)]
    average: Option<String>,

    /// Apply softmax over the class axis
    #[arg(long)]
    softmax: bool,

    /// Apply elementwise sigmoid
    #[arg(long)]
    sigmoid: bool,

    /// Expand class-index labels into one-hot columns
    #[arg(long)]
    onehot: bool,

    /// Compute per-class values in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Values {
    Flat(Vec<f32>),
    Rows(Vec<Vec<f32>>),
}

impl Values {
    fn into_array(self, name: &str) -> Result<ArrayD<f32>> {
        match self {
            Values::Flat(v) => Ok(Array1::from_vec(v).into_dyn()),
            Values::Rows(rows) => {
                let ncols = rows.first().map_or(0, Vec::len);
                if rows.iter().any(|r| r.len() != ncols) {
                    bail!("{} rows have different lengths", name);
                }
                let nrows = rows.len();
                let flat: Vec<f32> = rows.into_iter().flatten().collect();
                Ok(Array2::from_shape_vec((nrows, ncols), flat)?.into_dyn())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct Input {
    scores: Values,
    labels: Values,
}

fn base_config(cli: &Cli) -> Result<RocAucConfig> {
    if let Some(path) = &cli.config {
        return Ok(RocAucConfig::load_from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        log::info!("Using {}", default_path.display());
        return Ok(RocAucConfig::load_from_file(default_path)?);
    }
    Ok(RocAucConfig::default())
}

fn build_config(cli: &Cli, base: &RocAucConfig) -> Result<RocAucConfig> {
    let mut builder = ConfigBuilder::new()
        .to_onehot_y(base.to_onehot_y || cli.onehot)
        .add_softmax(base.add_softmax() || cli.softmax)
        .add_sigmoid(base.add_sigmoid() || cli.sigmoid)
        .average(base.average)
        .parallel(base.parallel || cli.parallel);
    if let Some(average) = &cli.average {
        builder = builder.average_str(average);
    }
    Ok(builder.build()?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();
    let config = build_config(&cli, &base_config(&cli)?)?;

    let content = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let input: Input = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    let scores = input.scores.into_array("scores")?;
    let labels = input.labels.into_array("labels")?;

    let evaluation = RocAucMetric::new(config).evaluate(scores.view(), labels.view())?;

    for diagnostic in &evaluation.diagnostics {
        println!("warning: {}", diagnostic);
    }
    match &evaluation.result {
        AucResult::Scalar(v) => println!("auc: {:.6}", v),
        AucResult::PerClass(values) => {
            for (class, v) in values.iter().enumerate() {
                println!("class {}: {:.6}", class, v);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roc_auc_rust::{Activation, Average, RocAucError};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("roc_auc_eval").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse(&["input.json", "--average", "micro", "--onehot", "--parallel"]);
        assert_eq!(cli.input, PathBuf::from("input.json"));
        assert_eq!(cli.average.as_deref(), Some("micro"));
        assert!(cli.onehot);
        assert!(cli.parallel);
        assert!(!cli.softmax);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_missing_input_is_rejected() {
        assert!(Cli::try_parse_from(["roc_auc_eval", "--softmax"]).is_err());
        assert!(Cli::try_parse_from(["roc_auc_eval", "input.json", "--unknown"]).is_err());
    }

    #[test]
    fn test_average_flag_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roc_auc.toml");
        std::fs::write(&path, "average = \"weighted\"\nto_onehot_y = true\n").unwrap();

        let cli = parse(&[
            "input.json",
            "--config",
            path.to_str().unwrap(),
            "--average",
            "none",
        ]);
        let config = build_config(&cli, &base_config(&cli).unwrap()).unwrap();
        assert_eq!(config.average, Average::None);
        assert!(config.to_onehot_y);
    }

    #[test]
    fn test_sigmoid_flag_conflicts_with_file_softmax() {
        let base = ConfigBuilder::new().add_softmax(true).build().unwrap();
        let cli = parse(&["input.json", "--sigmoid"]);
        let err = build_config(&cli, &base).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RocAucError>(),
            Some(RocAucError::ConflictingTransform)
        ));
    }

    #[test]
    fn test_flags_without_file() {
        let cli = parse(&["input.json", "--sigmoid"]);
        let config = build_config(&cli, &RocAucConfig::default()).unwrap();
        assert_eq!(config.activation, Activation::Sigmoid);
        assert_eq!(config.average, Average::Macro);
    }

    #[test]
    fn test_rows_input() {
        let input: Input =
            serde_json::from_str(r#"{"scores": [[0.1, 0.9], [0.8, 0.2]], "labels": [1, 0]}"#)
                .unwrap();
        assert_eq!(input.scores.into_array("scores").unwrap().shape(), &[2, 2]);
        assert_eq!(input.labels.into_array("labels").unwrap().shape(), &[2]);

        let ragged = Values::Rows(vec![vec![0.1, 0.2], vec![0.3]]);
        assert!(ragged.into_array("scores").is_err());
    }
}
