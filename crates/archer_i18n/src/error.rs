use std::path::PathBuf;

use thiserror::Error;

use crate::simple::SimpleParseError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    SimpleParse(#[from] SimpleParseError),

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
