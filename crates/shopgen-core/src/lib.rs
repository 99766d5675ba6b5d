//! Core contracts and helpers for shopgen.
//!
//! This crate defines the e-commerce entity records, the relational table
//! catalog they load into, and the invariant checks shared by the generator,
//! the store, and the CLI.

pub mod constraints;
pub mod entities;
pub mod error;
pub mod graph;
pub mod schema;
pub mod types;
pub mod validation;

pub use constraints::{Constraint, ForeignKey, PrimaryKey, UniqueConstraint};
pub use entities::{Customer, Dataset, Order, OrderItem, Payment, Product};
pub use error::{Error, Result};
pub use graph::{FkGraphReport, FkGraphSummary, build_fk_graph_report, load_order};
pub use schema::{Column, DatabaseSchema, EntityKind, Table, ecommerce_schema};
pub use types::{
    CURRENCY, ColumnType, MAX_ITEMS_PER_ORDER, OrderStatus, PaymentMethod, PaymentStatus,
    ProductCategory, round_currency,
};
pub use validation::{validate_dataset, validate_schema};
