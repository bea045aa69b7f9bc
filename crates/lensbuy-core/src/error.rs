use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("unknown sub-buyer: {0}")]
    UnknownBuyer(String),

    #[error("unknown cart item: {0}")]
    UnknownItem(String),

    #[error("product {0} is not in the catalog")]
    UnknownProduct(String),

    #[error("quantity {quantity} out of range; must be between 1 and {max}")]
    InvalidQuantity { quantity: u32, max: u32 },

    #[error("diopter {diopter} is not offered for product {product_id}")]
    DiopterNotOffered { product_id: String, diopter: String },

    #[error("item {item_id} has {requested} gifts but only earned {earned}")]
    TooManyGifts {
        item_id: String,
        requested: usize,
        earned: u32,
    },

    #[error("cannot build an order from an empty cart")]
    EmptyCart,
}

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error(transparent)]
    Catalog(#[from] ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize order: {0}")]
    Serialize(#[from] serde_json::Error),
}
