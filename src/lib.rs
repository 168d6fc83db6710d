//! # BinSolver API Client
//!
//! A Rust client SDK for the BinSolver REST API for packing items into 3D bins.
//!
//! The packing itself happens server-side; this crate only submits packing
//! requests and checks service health.
//!
//! ## Example
//!
//! ```no_run
//! use binsolver_sdk::{BinInput, BinSolverClient, ItemInput, Objective, PackRequestBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BinSolverClient::new("your-api-key");
//!
//!     let request = PackRequestBuilder::new()
//!         .add_bin(BinInput::new(10.0, 10.0, 10.0).with_id("box"))
//!         .add_item(ItemInput::new(5.0, 5.0, 5.0, 2))
//!         .objective(Objective::MinBins)
//!         .build()?;
//!
//!     let response = client.pack(request).await?;
//!     println!(
//!         "placed {} of {} items in {} bin(s)",
//!         response.stats.placed, response.stats.items, response.stats.bins_used
//!     );
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod client;
pub mod error;
pub mod types;

pub use builder::PackRequestBuilder;
pub use client::{BinSolverClient, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use error::{BinSolverError, Result};
pub use types::{
    BinInput, BinResult, ErrorDetail, ErrorResponse, ItemInput, Objective, PackRequest,
    PackResponse, PackStats, Placement,
};
