use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_FILE: &str = "data.json";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> u64;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_path: PathBuf,
}

impl Configuration {
    pub fn new<P: AsRef<Path>>(data_path: P) -> Self {
        Configuration {
            data_path: data_path.as_ref().to_path_buf(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_DATA_FILE)
    }
}
