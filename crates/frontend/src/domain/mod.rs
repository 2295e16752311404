pub mod branch_sales;
