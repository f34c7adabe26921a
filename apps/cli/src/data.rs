//! Question-bank directory loading.

use std::fs;
use std::path::Path;

use anyhow::Context;
use quiz_core::{loader, QuestionRepository};

/// Read every `*.yml`/`*.yaml` file under `dir` into a repository.
/// Files are visited in name order so the first-seen category order
/// is stable across runs.
pub fn load_repository(dir: &Path) -> anyhow::Result<QuestionRepository> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("cannot read question directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("yml") | Some("yaml")
            )
        })
        .collect();
    paths.sort();

    let mut questions = Vec::new();
    for path in &paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let mut parsed = loader::parse(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        tracing::debug!(file = %path.display(), count = parsed.len(), "loaded questions");
        questions.append(&mut parsed);
    }

    tracing::info!(files = paths.len(), questions = questions.len(), "question bank loaded");
    Ok(QuestionRepository::new(questions))
}
