pub mod list;

pub use list::ProductRevenueList;
