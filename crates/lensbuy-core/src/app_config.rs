use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Catalog file read by [`crate::FileCatalog`].
    pub catalog_path: PathBuf,
    /// JSON-lines file submitted orders are appended to.
    pub outbox_path: PathBuf,
    /// Largest quantity accepted on a single cart line.
    pub max_line_quantity: u32,
}
