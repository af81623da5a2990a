use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use credit_risk::error::AppError;
use credit_risk::pipeline::{
    intake, BatchEntry, CreditRiskService, LoanApplication, LogisticArtifact, ModelArtifact,
    PredictionRecord,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a single loan application
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Optional scorer artifact; omitted means rule-based scoring
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export of loan applications
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Optional scorer artifact; omitted means rule-based scoring
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

/// Unlike the server, which degrades gracefully, an explicitly requested
/// artifact that fails to load is an error here.
fn strict_service(model: Option<&Path>) -> Result<CreditRiskService, AppError> {
    let artifact = match model {
        Some(path) => {
            let artifact = LogisticArtifact::load(path)?;
            Some(Arc::new(artifact) as Arc<dyn ModelArtifact>)
        }
        None => None,
    };
    Ok(CreditRiskService::new(artifact))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let file = File::open(&args.file)?;
    let application: LoanApplication = serde_json::from_reader(BufReader::new(file))?;

    let service = strict_service(args.model.as_deref())?;
    let record = service.evaluate(&application)?;

    render_record(&record);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let file = File::open(&args.csv)?;
    let applications = intake::parse_applications(BufReader::new(file))?;

    let service = strict_service(args.model.as_deref())?;
    let result = service.evaluate_batch(&applications);

    println!(
        "Evaluated {} application(s), {} successful, {} failed",
        result.total,
        result.successful,
        result.total - result.successful
    );
    for (position, entry) in result.predictions.iter().enumerate() {
        match entry {
            BatchEntry::Prediction(record) => println!(
                "  #{position}: {} p={:.4} {} ({})",
                record.application_id.0,
                record.default_probability,
                record.decision.label(),
                record.risk_category.label()
            ),
            BatchEntry::Failure { error } => println!("  #{position}: failed: {error}"),
        }
    }
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn render_record(record: &PredictionRecord) {
    println!("Application {}", record.application_id.0);
    println!(
        "  default probability {:.4} ({})",
        record.default_probability,
        record.risk_category.label()
    );
    println!(
        "  decision {} at confidence {:.4}",
        record.decision.label(),
        record.confidence
    );
}
