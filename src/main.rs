use anyhow::{Context, Result};
use clap::Parser;
use rivu_holdout::tasks::{EvaluationConfig, HoldoutTailEvaluator};
use rivu_holdout::ui::cli::Args;
use rivu_holdout::ui::types::build::{build_learner, build_stream};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.print_config_schema {
        println!(
            "{}",
            serde_json::to_string_pretty(&EvaluationConfig::json_schema())?
        );
        return Ok(());
    }

    let config = args.evaluation_config()?;
    let source = args.source();
    let source_path = source.path().display().to_string();
    info!(source = %source_path, learner = %args.learner, "opening source");

    let stream =
        build_stream(source).with_context(|| format!("failed to open source {source_path}"))?;
    let learner = build_learner(args.learner);

    let mut evaluator = HoldoutTailEvaluator::new(learner, stream, config)?;
    let report = evaluator
        .run()
        .with_context(|| format!("evaluation over {source_path} aborted"))?;

    println!("{}", evaluator.learner());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
