//! Branch sales: the shared model and the aggregation pipeline behind the
//! revenue view.
//!
//! Three branch sources expose the same document shape; the pipeline flattens
//! them into per-line revenues, sums revenue per product name, filters by a
//! search query, sorts under an injected collator and totals what is left.

pub mod collate;
pub mod dataset;
pub mod format;
pub mod loader;
pub mod revenue;
pub mod table;

pub use collate::{CaseInsensitiveCollator, Collator};
pub use dataset::{BranchDataset, Branches, ProductRecord};
pub use format::{format_revenue, GroupedDecimalFormat, RevenueFormat};
pub use loader::join_branches;
pub use revenue::{
    aggregate, filter_by_name, line_revenues, sort_by_name, total_revenue, AggregatedProduct,
    LineRevenue,
};
pub use table::{build_revenue_table, RevenueRow, RevenueTable};
