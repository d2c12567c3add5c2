//! Card system: definitions, registry and the built-in catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (cost, creature stats)
//! - `CardRegistry`: Card definition lookup by id or name
//!
//! Card behaviour is not stored here; see `effects`.

pub mod catalog;
pub mod definition;
pub mod registry;

pub use catalog::{names, TokenSpec, WRAITHLING};
pub use definition::{CardDefinition, CardId, CardKind};
pub use registry::CardRegistry;
