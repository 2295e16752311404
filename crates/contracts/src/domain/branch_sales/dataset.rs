use serde::{Deserialize, Serialize};

/// One sales line as it appears in a branch source document.
///
/// Records are read-only once fetched. The sources are not validated: a
/// record without `unitPrice` or `sold` decodes with NaN in that slot, so
/// its revenue becomes NaN instead of failing the whole load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name, also the aggregation key (exact match)
    pub name: String,

    /// Price per unit
    #[serde(rename = "unitPrice", default = "missing_number")]
    pub unit_price: f64,

    /// Units sold
    #[serde(default = "missing_number")]
    pub sold: f64,
}

fn missing_number() -> f64 {
    f64::NAN
}

/// Payload of one branch endpoint: `{ "products": [ ... ] }`.
///
/// A document without a `products` field is a valid, empty branch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchDataset {
    #[serde(default)]
    pub products: Option<Vec<ProductRecord>>,
}

/// The three branch datasets, in fixed source order.
///
/// Each slot stays `None` until the loader has fetched it; the view starts
/// from `Branches::default()` and receives all three at once on success.
#[derive(Debug, Clone, Default)]
pub struct Branches {
    pub one: Option<BranchDataset>,
    pub two: Option<BranchDataset>,
    pub three: Option<BranchDataset>,
}

impl Branches {
    pub fn new(one: BranchDataset, two: BranchDataset, three: BranchDataset) -> Self {
        Self {
            one: Some(one),
            two: Some(two),
            three: Some(three),
        }
    }

    /// Datasets in branch order; absent branches stay in the array so the
    /// pipeline can skip them explicitly.
    pub fn datasets(&self) -> [Option<&BranchDataset>; 3] {
        [self.one.as_ref(), self.two.as_ref(), self.three.as_ref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_branch_document() {
        let doc = r#"{"products":[{"name":"Apples","unitPrice":0.5,"sold":912}]}"#;
        let dataset: BranchDataset = serde_json::from_str(doc).unwrap();
        let products = dataset.products.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Apples");
        assert_eq!(products[0].unit_price, 0.5);
        assert_eq!(products[0].sold, 912.0);
    }

    #[test]
    fn document_without_products_is_empty() {
        let dataset: BranchDataset = serde_json::from_str("{}").unwrap();
        assert!(dataset.products.is_none());
    }

    #[test]
    fn missing_numbers_decode_as_nan() {
        let doc = r#"{"products":[{"name":"Mystery"}]}"#;
        let dataset: BranchDataset = serde_json::from_str(doc).unwrap();
        let products = dataset.products.unwrap();
        assert!(products[0].unit_price.is_nan());
        assert!(products[0].sold.is_nan());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc = r#"{"products":[{"name":"Apples","unitPrice":0.5,"sold":10,"sku":"A-1"}]}"#;
        let dataset: BranchDataset = serde_json::from_str(doc).unwrap();
        assert_eq!(dataset.products.unwrap().len(), 1);
    }
}
