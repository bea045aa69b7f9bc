//! Domain model for the contact-lens group-purchase flow: catalog browsing,
//! the shared multi-buyer cart, order assembly, and the seams to the
//! catalog and order backends.

pub mod app_config;
pub mod cart;
pub mod catalog;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use cart::{BuyerSummary, Cart};
pub use catalog::{diopter_options, load_catalog, parse_catalog, Catalog};
pub use collaborators::{CatalogSource, FileCatalog, JsonlOutbox, OrderHistory, OrderSubmitter};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{CartError, CollaboratorError, ConfigError};
pub use products::{CartItem, Gift, Order, Product, SubBuyer, User, DEFAULT_DIOPTER};
