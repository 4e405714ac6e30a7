use crate::model::RunSummary;
use std::path::Path;

pub fn write_json(summary: &RunSummary, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, serde_json::to_string_pretty(summary)?)?;
    Ok(())
}

pub fn read_json(path: &Path) -> anyhow::Result<RunSummary> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read report {}: {}", path.display(), e))?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("failed to parse report {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RunSummary;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports/report.json");

        let summary = RunSummary::from_results("data/suite.jsonl".into(), "m".into(), vec![]);
        write_json(&summary, &out).unwrap();

        let loaded = read_json(&out).unwrap();
        assert_eq!(loaded.dataset_path, "data/suite.jsonl");
        assert_eq!(loaded.model, "m");
        assert_eq!(loaded.total, 0);
    }
}
