use std::sync::Arc;

use rubric_core::engine::runner::Runner;
use rubric_core::gate::meets_min_pass_rate;
use rubric_core::prompts::PromptStore;
use rubric_core::providers::llm::fake::FakeClient;
use rubric_core::providers::llm::openai::OpenAIClient;
use rubric_core::providers::llm::LlmClient;
use rubric_core::report::{console, json, markdown, percent};

use super::super::args::RunArgs;
use crate::exit_codes::{GATE_FAILED, SUCCESS};

pub(crate) async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let client: Arc<dyn LlmClient> = match args.provider.as_str() {
        "openai" => {
            let api_key = args.api_key.clone().ok_or_else(|| {
                anyhow::anyhow!(
                    "config error: --api-key or OPENAI_API_KEY is required for the openai provider"
                )
            })?;
            Arc::new(OpenAIClient::new(api_key))
        }
        "fake" => {
            let mut fake = FakeClient::new();
            if let Some(resp) = &args.fake_response {
                fake = fake.with_response(resp.clone());
            }
            Arc::new(fake)
        }
        other => anyhow::bail!("config error: unknown provider '{}' (expected openai|fake)", other),
    };

    let prompts = match &args.prompts {
        Some(dir) => PromptStore::from_dir(dir)?,
        None => PromptStore::default(),
    };

    let runner = Runner::new(client, prompts, rubric_metrics::default_metrics());
    let summary = runner.run_eval(&args.dataset, &args.model).await?;

    json::write_json(&summary, &args.out_json)?;
    markdown::write_markdown(&summary, &args.out_md)?;
    console::print_summary(&summary);

    if !meets_min_pass_rate(summary.pass_rate, args.min_pass_rate) {
        eprintln!(
            "FAIL: pass_rate {} < min_pass_rate {}",
            percent(summary.pass_rate),
            percent(args.min_pass_rate)
        );
        return Ok(GATE_FAILED);
    }

    println!(
        "OK: pass_rate {} (min {})",
        percent(summary.pass_rate),
        percent(args.min_pass_rate)
    );
    Ok(SUCCESS)
}
