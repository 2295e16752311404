use std::collections::HashMap;

use super::collate::Collator;
use super::dataset::Branches;

/// Revenue of a single product record: `unit_price * sold`.
///
/// Derived on the fly while flattening the branches, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRevenue {
    pub name: String,
    pub revenue: f64,
}

/// One row of the aggregated view: total revenue per distinct product name.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedProduct {
    pub name: String,
    pub revenue: f64,
}

/// Flattens every present branch into per-line revenues.
///
/// An absent dataset, or a dataset without a product list, contributes
/// nothing; that is an empty branch, not an error.
pub fn line_revenues(branches: &Branches) -> Vec<LineRevenue> {
    let mut lines = Vec::new();
    for dataset in branches.datasets().into_iter().flatten() {
        let Some(products) = dataset.products.as_ref() else {
            continue;
        };
        for product in products {
            lines.push(LineRevenue {
                name: product.name.clone(),
                revenue: product.unit_price * product.sold,
            });
        }
    }
    lines
}

/// Sums revenue per product name across all branches.
///
/// Grouping is by the exact, case-sensitive name (the search filter is
/// case-insensitive on purpose; the two stay asymmetric). Output keeps
/// first-seen order; sorting is a separate stage.
pub fn aggregate(branches: &Branches) -> Vec<AggregatedProduct> {
    let mut products: Vec<AggregatedProduct> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for line in line_revenues(branches) {
        match index.get(&line.name) {
            Some(&at) => products[at].revenue += line.revenue,
            None => {
                index.insert(line.name.clone(), products.len());
                products.push(AggregatedProduct {
                    name: line.name,
                    revenue: line.revenue,
                });
            }
        }
    }

    products
}

/// Keeps the products whose name contains the query, case-insensitively.
///
/// The empty query matches everything. Revenue values are untouched.
pub fn filter_by_name(products: Vec<AggregatedProduct>, query: &str) -> Vec<AggregatedProduct> {
    let query = query.to_lowercase();
    products
        .into_iter()
        .filter(|product| product.name.to_lowercase().contains(&query))
        .collect()
}

/// Sorts products alphabetically by name under the given collator.
///
/// The sort is stable, so entries the collator cannot distinguish keep
/// their incoming order.
pub fn sort_by_name<C: Collator>(products: &mut [AggregatedProduct], collator: &C) {
    products.sort_by(|a, b| collator.compare(&a.name, &b.name));
}

/// Total revenue of the given set, scoped to whatever is currently
/// displayed rather than the full aggregation.
pub fn total_revenue(products: &[AggregatedProduct]) -> f64 {
    // Seeded fold: f64's empty-sum identity is -0.0, which would format
    // with a sign. An empty set must total +0.0.
    products
        .iter()
        .map(|product| product.revenue)
        .fold(0.0, |total, revenue| total + revenue)
}
