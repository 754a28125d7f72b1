use crate::error::Error;
use crate::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub struct Script {
    text: String,
}

impl Script {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingInput {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path).map_err(Error::io(path))?;

        Ok(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
