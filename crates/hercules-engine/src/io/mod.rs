use std::fs;
use std::path::{Path, PathBuf};

use crate::editing::PageDocument;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File is not valid UTF-8: {path}")]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

/// Read a document file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| IoError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Write document text, creating parent directories as needed
pub fn write_text(path: &Path, text: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}

/// Load and parse a pages document
pub fn read_document(path: &Path) -> Result<PageDocument, IoError> {
    let text = read_text(path)?;
    let document = PageDocument::from_text(&text);
    log::info!(
        "loaded {} ({} pages)",
        path.display(),
        document.pages().len()
    );
    Ok(document)
}

/// Save a pages document and mark it clean. The file holds exactly the
/// serialized page text, with no header or trailing newline added.
pub fn write_document(path: &Path, document: &mut PageDocument) -> Result<(), IoError> {
    write_text(path, &document.text())?;
    document.mark_saved();
    log::info!("saved {} (v{})", path.display(), document.version());
    Ok(())
}
