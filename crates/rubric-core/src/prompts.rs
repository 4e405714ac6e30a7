use std::collections::HashMap;
use std::path::Path;

use crate::errors::HarnessError;
use crate::model::TaskKind;

const DEFAULT_CLASSIFY: &str = include_str!("../prompts/classify.md");
const DEFAULT_EXTRACT_JSON: &str = include_str!("../prompts/extract_json.md");

/// Prompt templates keyed by task type.
///
/// Built-in templates are embedded in the crate; `from_dir` lets an eval
/// suite override them per task with `classify.md` / `extract_json.md`
/// files.
#[derive(Debug, Clone)]
pub struct PromptStore {
    templates: HashMap<TaskKind, String>,
}

impl Default for PromptStore {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(TaskKind::Label, DEFAULT_CLASSIFY.to_string());
        templates.insert(TaskKind::Json, DEFAULT_EXTRACT_JSON.to_string());
        Self { templates }
    }
}

impl PromptStore {
    /// Built-ins plus any per-task override files found in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, HarnessError> {
        let mut store = Self::default();
        for (task, file) in [
            (TaskKind::Label, "classify.md"),
            (TaskKind::Json, "extract_json.md"),
        ] {
            let path = dir.join(file);
            if !path.exists() {
                continue;
            }
            let template = std::fs::read_to_string(&path).map_err(|e| HarnessError::Prompt {
                detail: format!("failed to read {}: {}", path.display(), e),
            })?;
            store.templates.insert(task, template);
        }
        Ok(store)
    }

    pub fn template_for(&self, task: TaskKind) -> Result<&str, HarnessError> {
        self.templates
            .get(&task)
            .map(String::as_str)
            .ok_or_else(|| HarnessError::Prompt {
                detail: format!("no template for task '{task}'"),
            })
    }
}

/// Render a template by substituting every `{{input}}` placeholder.
pub fn render(template: &str, input_text: &str) -> String {
    template.replace("{{input}}", input_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn render_substitutes_input() {
        assert_eq!(render("say: {{input}}!", "hello"), "say: hello!");
        assert_eq!(render("{{input}} and {{input}}", "x"), "x and x");
    }

    #[test]
    fn default_store_covers_both_tasks() {
        let store = PromptStore::default();
        assert!(store
            .template_for(TaskKind::Label)
            .unwrap()
            .contains("{{input}}"));
        assert!(store
            .template_for(TaskKind::Json)
            .unwrap()
            .contains("{{input}}"));
    }

    #[test]
    fn from_dir_overrides_only_present_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("classify.md")).unwrap();
        f.write_all(b"custom {{input}}").unwrap();

        let store = PromptStore::from_dir(dir.path()).unwrap();
        assert_eq!(store.template_for(TaskKind::Label).unwrap(), "custom {{input}}");
        // json falls back to the built-in
        assert_eq!(
            store.template_for(TaskKind::Json).unwrap(),
            DEFAULT_EXTRACT_JSON
        );
    }
}
