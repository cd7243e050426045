use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render results: {0}")]
    Render(#[from] askama::Error),
}
