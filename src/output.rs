//! Writing the badge to a file or to the GitHub Actions output file.

use std::fs::{
    self,
    OpenOptions,
};
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    Context,
    Result,
};
use uuid::Uuid;

/// Default name of the CI output holding the badge.
pub const DEFAULT_OUTPUT_NAME: &str = "badge";

/// File used when neither `--path` nor `GITHUB_OUTPUT` is available.
pub const FALLBACK_BADGE_PATH: &str = "badge.svg.tmp";

/// Where the badge ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Overwrite a file with the SVG.
    File(PathBuf),
    /// Append a named multi-line value to a CI output file.
    CiOutput { file: PathBuf, name: String },
}

/// Choose the output target.
///
/// An explicit path wins. Otherwise a non-empty CI output file is used, and
/// failing both the badge is written to [`FALLBACK_BADGE_PATH`].
pub fn select_target(
    path: Option<PathBuf>,
    github_output: Option<PathBuf>,
    name: &str,
) -> OutputTarget {
    if let Some(path) = path {
        return OutputTarget::File(path);
    }
    match github_output.filter(|file| !file.as_os_str().is_empty()) {
        Some(file) => OutputTarget::CiOutput {
            file,
            name: name.to_string(),
        },
        None => OutputTarget::File(PathBuf::from(FALLBACK_BADGE_PATH)),
    }
}

/// Write the badge to the selected target.
pub fn deliver(target: &OutputTarget, svg: &str) -> Result<()> {
    match target {
        OutputTarget::File(path) => write_badge(path, svg),
        OutputTarget::CiOutput { file, name } => set_multiline_output(file, name, svg),
    }
}

/// Overwrite `path` with the badge SVG.
pub fn write_badge(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).with_context(|| format!("Failed to write badge to {}", path.display()))
}

/// Append `name<<DELIMITER`, the value and `DELIMITER` to the output file.
///
/// A new delimiter is generated on every call so it cannot collide with
/// anything inside the value.
pub fn set_multiline_output(output_file: &Path, name: &str, value: &str) -> Result<()> {
    let block = format_multiline_output(name, value, &new_delimiter());

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_file)
        .with_context(|| format!("Failed to open {}", output_file.display()))?;
    file.write_all(block.as_bytes())
        .with_context(|| format!("Failed to write to {}", output_file.display()))?;

    Ok(())
}

/// Format one multi-line output block.
///
/// The runner joins the lines between the header and the closing delimiter,
/// so the newline before the delimiter is always written, even when the
/// value already ends with one.
pub fn format_multiline_output(name: &str, value: &str, delimiter: &str) -> String {
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn new_delimiter() -> String {
    format!("ghadelimiter_{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use tempfile::{
        NamedTempFile,
        TempDir,
    };

    use super::*;

    const SVG: &str = "<svg>...</svg>";

    /// Split a block into (name, delimiter, value), checking the closing line.
    fn parse_block(block: &str) -> (String, String, String) {
        let lines: Vec<&str> = block.lines().collect();
        let (name, delimiter) = lines[0].split_once("<<").unwrap();
        let closing = lines[lines.len() - 1];
        assert_eq!(closing, delimiter, "closing line must equal the delimiter");
        let value = lines[1..lines.len() - 1].join("\n");
        (name.to_string(), delimiter.to_string(), value)
    }

    #[test]
    fn test_format_multiline_output() {
        let block = format_multiline_output("badge", SVG, "EOF");
        assert_eq!(block, "badge<<EOF\n<svg>...</svg>\nEOF\n");
    }

    /// Read a block back the way the Actions runner does: everything between
    /// the header line and the delimiter line, joined with newlines.
    fn read_output_value(block: &str, name: &str) -> String {
        let mut lines = block.split('\n');
        let delimiter = lines
            .next()
            .and_then(|header| header.strip_prefix(&format!("{name}<<")))
            .unwrap()
            .to_string();
        let mut value = Vec::new();
        for line in lines.by_ref() {
            if line == delimiter {
                break;
            }
            value.push(line);
        }
        assert_eq!(lines.collect::<Vec<_>>(), vec![""], "nothing after the delimiter");
        value.join("\n")
    }

    #[test]
    fn test_format_multiline_output_preserves_value() {
        for value in [
            "<svg/>",
            "<svg/>\n",
            "<svg/>\n\n",
            "<svg>\n</svg>",
            "\n<svg/>",
            "",
        ] {
            let block = format_multiline_output("badge", value, "EOF");
            assert_eq!(read_output_value(&block, "badge"), value, "block: {block:?}");
        }
    }

    #[test]
    fn test_format_multiline_output_trailing_newline() {
        let block = format_multiline_output("badge", "<svg/>\n", "EOF");
        assert_eq!(block, "badge<<EOF\n<svg/>\n\nEOF\n");
    }

    #[test]
    fn test_set_multiline_output() {
        let file = NamedTempFile::new().unwrap();
        set_multiline_output(file.path(), "badge", SVG).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let (name, token, value) = parse_block(&content);
        assert_eq!(name, "badge");
        assert!(token.starts_with("ghadelimiter_"));
        assert_eq!(value, SVG);
    }

    #[test]
    fn test_set_multiline_output_appends_with_fresh_delimiters() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "existing=value\n").unwrap();

        set_multiline_output(file.path(), "badge", SVG).unwrap();
        set_multiline_output(file.path(), "badge", SVG).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content
            .strip_prefix("existing=value\n")
            .unwrap()
            .lines()
            .collect();
        let blocks: Vec<String> = lines.chunks(3).map(|chunk| chunk.join("\n")).collect();
        assert_eq!(blocks.len(), 2);

        let (_, first, _) = parse_block(&blocks[0]);
        let (_, second, _) = parse_block(&blocks[1]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_write_badge_overwrites() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "old content that is longer than the badge").unwrap();

        write_badge(file.path(), SVG).unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), SVG);
    }

    #[test]
    fn test_write_badge_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("badge.svg");
        assert!(write_badge(&path, SVG).is_err());
    }

    #[test]
    fn test_select_target_prefers_path() {
        let target = select_target(
            Some(PathBuf::from("out.svg")),
            Some(PathBuf::from("/tmp/gh_output")),
            "badge",
        );
        assert_eq!(target, OutputTarget::File(PathBuf::from("out.svg")));
    }

    #[test]
    fn test_select_target_ci_output() {
        let target = select_target(None, Some(PathBuf::from("/tmp/gh_output")), "status");
        assert_eq!(
            target,
            OutputTarget::CiOutput {
                file: PathBuf::from("/tmp/gh_output"),
                name: "status".to_string(),
            }
        );
    }

    #[test]
    fn test_select_target_fallback() {
        assert_eq!(
            select_target(None, None, "badge"),
            OutputTarget::File(PathBuf::from(FALLBACK_BADGE_PATH))
        );
        assert_eq!(
            select_target(None, Some(PathBuf::new()), "badge"),
            OutputTarget::File(PathBuf::from(FALLBACK_BADGE_PATH))
        );
    }
}
