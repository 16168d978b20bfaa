//! Drift detection between rendered output and a file on disk

use std::path::Path;

use similar::TextDiff;

use crate::Result;

/// State of an output file relative to freshly rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    /// The file does not exist
    Missing,
    /// The file matches the rendered content byte for byte
    UpToDate,
    /// The file differs; `diff` is a unified diff from file to rendered
    Changed { diff: String },
}

impl Drift {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Drift::UpToDate)
    }
}

/// Compare `rendered` with the current content of `path`.
pub fn check_drift(path: &Path, rendered: &str) -> Result<Drift> {
    let Some(current) = tmpl_fs::io::read_text_if_exists(path)? else {
        return Ok(Drift::Missing);
    };

    if current == rendered {
        return Ok(Drift::UpToDate);
    }

    let name = path.display().to_string();
    let diff = TextDiff::from_lines(current.as_str(), rendered)
        .unified_diff()
        .context_radius(3)
        .header(&name, &format!("{} (rendered)", name))
        .to_string();

    Ok(Drift::Changed { diff })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let drift = check_drift(&temp.path().join(".remarkrc.json"), "{}\n").unwrap();
        assert_eq!(drift, Drift::Missing);
    }

    #[test]
    fn test_up_to_date() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".remarkrc.json");
        fs::write(&path, "{}\n").unwrap();

        assert!(check_drift(&path, "{}\n").unwrap().is_up_to_date());
    }

    #[test]
    fn test_changed_includes_diff() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".remarkrc.yaml");
        fs::write(&path, "frail: false\nplugins: {}\n").unwrap();

        let drift = check_drift(&path, "frail: true\nplugins: {}\n").unwrap();
        let Drift::Changed { diff } = drift else {
            panic!("expected drift");
        };
        assert!(diff.contains("-frail: false"));
        assert!(diff.contains("+frail: true"));
    }
}
