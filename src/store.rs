//! Issues are stored as a JSON array in a file.

use anyhow::{Context as _, Result};
use civicspot_boundary as json;
use civicspot_entities::issue::Issue;
use std::{fs::File, io::BufReader, io::Read, path::Path};

pub fn load_issues_from_file(path: &Path) -> Result<Vec<Issue>> {
    let file = File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
    let issues = read_issues(BufReader::new(file))
        .with_context(|| format!("Unable to read issues from {}", path.display()))?;
    log::info!("Loaded {} issue(s) from {}", issues.len(), path.display());
    Ok(issues)
}

fn read_issues<R: Read>(reader: R) -> Result<Vec<Issue>> {
    let issues: Vec<json::Issue> = serde_json::from_reader(reader)?;
    Ok(issues.into_iter().map(Issue::from).collect())
}
