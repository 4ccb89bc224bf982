use std::fs::File;
use std::io::{BufReader, Error as IoError};

#[derive(Debug)]
pub enum FileReaderError {
    IoError { path: String, source: IoError },
}

impl std::fmt::Display for FileReaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileReaderError::IoError { path, source } => write!(f, "IO error reading {}: {}", path, source),
        }
    }
}

impl std::error::Error for FileReaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileReaderError::IoError { source, .. } => Some(source),
        }
    }
}

pub fn create_file_reader(path: &str) -> Result<BufReader<File>, FileReaderError> {
    let file = File::open(path).map_err(|source| FileReaderError::IoError { path: path.to_owned(), source })?;
    Ok(BufReader::new(file))
}
