use std::path::{Path, PathBuf};

use tokio::{
    fs::File,
    io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt},
};

use crate::error::{ConfigError, Error, IoError};

#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(ConfigError::File(error.kind()).into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_into(&mut self, buffer: &mut String) -> Result<(), Error> {
        match &mut self.inner {
            Some(reader) => reader
                .read_to_string(buffer)
                .await
                .map(|_| ())
                .map_err(|error| IoError::File(error.kind()).into()),

            None => Err(IoError::Reader(std::io::ErrorKind::InvalidInput).into()),
        }
    }
}

/// Collects lines until the first blank line or end of input.
pub async fn read_poem<R: AsyncBufRead + Unpin>(reader: R) -> Result<String, Error> {
    let mut lines = reader.lines();
    let mut poem = String::new();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|error| IoError::Stdin(error.kind()))?
    {
        if line.trim().is_empty() {
            break;
        }

        poem.push_str(&line);
        poem.push('\n');
    }

    Ok(poem.trim().to_string())
}
