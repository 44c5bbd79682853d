use crate::domain::swagger::Document;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fmt,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

pub const DEFAULT_OUTPUT_FILE: &str = "swagger.json";

/// Where the rendered document goes. `-` on the command line means stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_arg(value: &str) -> Self {
        match value.trim() {
            "-" => OutputTarget::Stdout,
            "" => OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE)),
            path => OutputTarget::File(PathBuf::from(path)),
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => f.write_str("<stdout>"),
        }
    }
}

/// Tab-indented pretty JSON.
pub fn render<W: Write>(document: &Document, writer: W) -> io::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(writer, formatter);
    document.serialize(&mut serializer)?;
    Ok(())
}

pub fn render_to_string(document: &Document) -> io::Result<String> {
    let mut buffer = Vec::new();
    render(document, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Write the document and return the absolute path of the created file, or
/// `None` when it went to stdout.
pub fn write_document(document: &Document, target: &OutputTarget) -> io::Result<Option<PathBuf>> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            render(document, &mut lock)?;
            writeln!(lock)?;
            lock.flush()?;
            Ok(None)
        }
        OutputTarget::File(path) => write_file(document, path).map(Some),
    }
}

fn write_file(document: &Document, path: &Path) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    render(document, &mut writer)?;
    writer.flush()?;
    fs::canonicalize(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdout() {
        assert_eq!(OutputTarget::from_arg("-"), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_arg("api.json"),
            OutputTarget::File(PathBuf::from("api.json"))
        );
        assert_eq!(OutputTarget::from_arg(""), OutputTarget::default());
    }
}
