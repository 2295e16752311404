use super::collate::Collator;
use super::dataset::Branches;
use super::format::RevenueFormat;
use super::revenue::{aggregate, filter_by_name, sort_by_name, total_revenue};

/// One rendered line of the revenue table.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueRow {
    pub name: String,
    pub revenue: String,
}

/// Everything the table needs to render: rows already filtered, sorted and
/// formatted, plus the total over exactly those rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueTable {
    pub rows: Vec<RevenueRow>,
    pub total: String,
}

/// Builds the display model for the current datasets and search query.
///
/// The total is computed over the filtered set, so narrowing the search
/// narrows the total with it.
pub fn build_revenue_table<C, F>(
    branches: &Branches,
    query: &str,
    collator: &C,
    format: &F,
) -> RevenueTable
where
    C: Collator,
    F: RevenueFormat,
{
    let mut products = filter_by_name(aggregate(branches), query);
    sort_by_name(&mut products, collator);

    let total = format.format(total_revenue(&products));
    let rows = products
        .into_iter()
        .map(|product| RevenueRow {
            name: product.name,
            revenue: format.format(product.revenue),
        })
        .collect();

    RevenueTable { rows, total }
}

#[cfg(test)]
mod tests {
    use super::super::collate::CaseInsensitiveCollator;
    use super::super::dataset::{BranchDataset, ProductRecord};
    use super::super::format::GroupedDecimalFormat;
    use super::*;

    fn record(name: &str, unit_price: f64, sold: f64) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            unit_price,
            sold,
        }
    }

    fn dataset(products: Vec<ProductRecord>) -> BranchDataset {
        BranchDataset {
            products: Some(products),
        }
    }

    fn sample_branches() -> Branches {
        Branches::new(
            dataset(vec![record("Widget", 10.0, 3.0), record("Gizmo", 2.5, 4.0)]),
            dataset(vec![record("Widget", 5.0, 2.0)]),
            dataset(vec![record("Anvil", 50.0, 1.0)]),
        )
    }

    fn build(branches: &Branches, query: &str) -> RevenueTable {
        build_revenue_table(
            branches,
            query,
            &CaseInsensitiveCollator,
            &GroupedDecimalFormat,
        )
    }

    #[test]
    fn rows_are_sorted_and_formatted() {
        let table = build(&sample_branches(), "");

        assert_eq!(
            table.rows,
            vec![
                RevenueRow {
                    name: "Anvil".to_string(),
                    revenue: "50.00".to_string(),
                },
                RevenueRow {
                    name: "Gizmo".to_string(),
                    revenue: "10.00".to_string(),
                },
                RevenueRow {
                    name: "Widget".to_string(),
                    revenue: "40.00".to_string(),
                },
            ]
        );
        assert_eq!(table.total, "100.00");
    }

    #[test]
    fn query_narrows_rows_and_total_together() {
        let table = build(&sample_branches(), "wid");

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].name, "Widget");
        assert_eq!(table.total, "40.00");
    }

    #[test]
    fn unmatched_query_leaves_an_empty_table() {
        let table = build(&sample_branches(), "zzz");

        assert!(table.rows.is_empty());
        assert_eq!(table.total, "0.00");
    }

    #[test]
    fn no_datasets_build_an_empty_table() {
        let table = build(&Branches::default(), "");

        assert!(table.rows.is_empty());
        assert_eq!(table.total, "0.00");
    }

    #[test]
    fn large_revenues_come_out_grouped() {
        let branches = Branches::new(
            dataset(vec![record("Bulk", 1000.0, 1234.5)]),
            BranchDataset::default(),
            BranchDataset::default(),
        );

        let table = build(&branches, "");
        assert_eq!(table.rows[0].revenue, "1,234,500.00");
        assert_eq!(table.total, "1,234,500.00");
    }
}
