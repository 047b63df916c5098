use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipientsError {
    #[error("failed to read recipients from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no recipients given; pass names as arguments or use --file")]
    Empty,
}

/// Parse a recipients file: one recipient per line, blank lines and `#` comments
/// are skipped, surrounding whitespace is trimmed.
pub fn parse_recipients(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_recipients(path: &Path) -> Result<Vec<String>, RecipientsError> {
    let content = fs::read_to_string(path).map_err(|source| RecipientsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_recipients(&content))
}

/// Command-line recipients, trimmed, blanks dropped.
pub fn collect_pinned(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Recipients from the command line and an optional file, in that order.
pub fn collect_recipients(
    args: &[String],
    file: Option<&Path>,
) -> Result<Vec<String>, RecipientsError> {
    let mut recipients = collect_pinned(args);

    if let Some(path) = file {
        recipients.extend(load_recipients(path)?);
    }

    if recipients.is_empty() {
        return Err(RecipientsError::Empty);
    }
    Ok(recipients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let content = "# team\nAda Lovelace\n\n  Grace Hopper  \n#Alan\nBarbara Liskov\n";
        assert_eq!(
            parse_recipients(content),
            vec!["Ada Lovelace", "Grace Hopper", "Barbara Liskov"]
        );
    }

    #[test]
    fn test_collect_args_then_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "carol@example.com").unwrap();

        let args = vec!["alice@example.com".to_string(), " ".to_string()];
        let recipients = collect_recipients(&args, Some(file.path())).unwrap();
        assert_eq!(recipients, vec!["alice@example.com", "carol@example.com"]);
    }

    #[test]
    fn test_collect_nothing_is_an_error() {
        assert!(matches!(
            collect_recipients(&[], None),
            Err(RecipientsError::Empty)
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_recipients(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
