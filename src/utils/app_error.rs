use std::path::PathBuf;

/// Errors that abort the whole run.
#[derive(Debug)]
pub enum AppError {
    Prompt(std::io::Error),
    InvalidConfig(String),
    Open {
        path: PathBuf,
        source: umya_spreadsheet::XlsxError,
    },
    NoSheet(PathBuf),
    Save {
        path: PathBuf,
        source: umya_spreadsheet::XlsxError,
    },
    Progress(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AppError::Prompt(e) => write!(f, "Failed to read input: {}", e),
            AppError::InvalidConfig(e) => write!(f, "Invalid input: {}", e),
            AppError::Open { path, source } => {
                write!(f, "Failed to open {}: {}", path.display(), source)
            }
            AppError::NoSheet(path) => write!(f, "{} has no worksheets", path.display()),
            AppError::Save { path, source } => {
                write!(f, "Failed to save {}: {}", path.display(), source)
            }
            AppError::Progress(e) => write!(f, "Failed to write progress: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Prompt(e) | AppError::Progress(e) => Some(e),
            AppError::Open { source, .. } | AppError::Save { source, .. } => Some(source),
            AppError::InvalidConfig(_) | AppError::NoSheet(_) => None,
        }
    }
}
