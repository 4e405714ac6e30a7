use std::path::Path;

use crate::errors::HarnessError;
use crate::model::DatasetRow;

/// Load a newline-delimited JSON dataset, one row per non-empty line.
///
/// Rows come back in file order. Any malformed line (including an unknown
/// task type) is a fatal dataset error naming the path and line number.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetRow>, HarnessError> {
    let raw = std::fs::read_to_string(path).map_err(|e| HarnessError::Dataset {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;

    let mut rows = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: DatasetRow = serde_json::from_str(line).map_err(|e| HarnessError::Dataset {
            path: path.display().to_string(),
            detail: format!("line {}: {}", idx + 1, e),
        })?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskKind;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_rows_in_file_order_and_skips_blank_lines() {
        let f = write_temp(concat!(
            r#"{"id":"a","task":"label","input":"one","expected":{"label":"x"}}"#,
            "\n\n",
            r#"{"id":"b","task":"json","input":"two","expected":{"schema":{"type":"object"}}}"#,
            "\n",
        ));
        let rows = load_dataset(f.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "a");
        assert_eq!(rows[0].task, TaskKind::Label);
        assert_eq!(rows[1].id, "b");
        assert_eq!(rows[1].task, TaskKind::Json);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let f = write_temp(concat!(
            r#"{"id":"a","task":"label","input":"one","expected":{"label":"x"}}"#,
            "\n",
            "not json\n",
        ));
        let err = load_dataset(f.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "err={err}");
    }

    #[test]
    fn unknown_task_fails_the_load() {
        let f = write_temp(
            r#"{"id":"a","task":"rank","input":"one","expected":{"label":"x"}}
"#,
        );
        assert!(load_dataset(f.path()).is_err());
    }

    #[test]
    fn missing_file_is_a_dataset_error() {
        let err = load_dataset(Path::new("/definitely/missing/rows.jsonl")).unwrap_err();
        assert!(matches!(err, HarnessError::Dataset { .. }));
    }
}
