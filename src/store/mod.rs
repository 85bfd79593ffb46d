//! Client for the hosted store's PostgREST-style interface (`/rest/v1/<table>`).

pub mod client;
pub mod query;
pub mod representation;

pub use client::StoreClient;
pub use query::{Query, Table};
pub use representation::Representation;
