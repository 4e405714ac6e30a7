use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rubric",
    version,
    about = "Score LLM outputs against datasets and gate CI on pass-rate budgets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an eval over a dataset and write JSON/Markdown reports
    Run(RunArgs),
    /// Compare a run report against a stored baseline pass rate
    Gate(GateArgs),
    /// Merge JSON reports into one Markdown PR comment
    CiSummary(CiSummaryArgs),
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    /// Path to a .jsonl dataset
    #[arg(long)]
    pub dataset: PathBuf,

    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// provider backend (openai|fake)
    #[arg(long, default_value = "openai")]
    pub provider: String,

    /// fixed response returned by the fake provider
    #[arg(long)]
    pub fake_response: Option<String>,

    /// directory with prompt template overrides (classify.md, extract_json.md)
    #[arg(long)]
    pub prompts: Option<PathBuf>,

    #[arg(long, default_value = "reports/report.json")]
    pub out_json: PathBuf,

    #[arg(long, default_value = "reports/report.md")]
    pub out_md: PathBuf,

    /// minimum pass rate required for a zero exit
    #[arg(long, default_value_t = 0.90)]
    pub min_pass_rate: f64,

    /// OpenAI API key (openai provider only)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Parser, Clone)]
pub struct GateArgs {
    #[arg(long)]
    pub report_json: PathBuf,

    #[arg(long, default_value = "baselines/eval_baseline.json")]
    pub baseline_json: PathBuf,

    /// Baseline key (for example: classification, extraction)
    #[arg(long)]
    pub dataset_key: String,

    /// Maximum allowed pass-rate drop (absolute, e.g. 0.03 = 3%)
    #[arg(long, default_value_t = 0.03)]
    pub max_drop: f64,
}

#[derive(Parser, Clone)]
pub struct CiSummaryArgs {
    #[arg(long, num_args = 1.., required = true)]
    pub reports: Vec<PathBuf>,

    #[arg(long, default_value = "reports/pr_comment.md")]
    pub out: PathBuf,
}
