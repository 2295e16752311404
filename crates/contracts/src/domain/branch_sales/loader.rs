use std::future::Future;

use super::dataset::{BranchDataset, Branches};

/// Joins the three branch fetches into one result.
///
/// All three futures are polled together; the load succeeds only when every
/// source resolves. The first failure aborts the whole join with the
/// triggering message, and already-fetched datasets are discarded so the
/// view never renders a partial table.
pub async fn join_branches<A, B, C>(one: A, two: B, three: C) -> Result<Branches, String>
where
    A: Future<Output = Result<BranchDataset, String>>,
    B: Future<Output = Result<BranchDataset, String>>,
    C: Future<Output = Result<BranchDataset, String>>,
{
    let (one, two, three) = futures::try_join!(one, two, three)?;
    Ok(Branches::new(one, two, three))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::super::dataset::ProductRecord;
    use super::*;

    fn loaded(name: &str) -> BranchDataset {
        BranchDataset {
            products: Some(vec![ProductRecord {
                name: name.to_string(),
                unit_price: 1.0,
                sold: 1.0,
            }]),
        }
    }

    #[test]
    fn all_sources_resolving_yields_all_datasets() {
        let result = block_on(join_branches(
            async { Ok(loaded("A")) },
            async { Ok(loaded("B")) },
            async { Ok(loaded("C")) },
        ));

        let branches = result.unwrap();
        assert!(branches.one.is_some());
        assert!(branches.two.is_some());
        assert!(branches.three.is_some());
    }

    #[test]
    fn one_failing_source_fails_the_whole_load() {
        let result = block_on(join_branches(
            async { Ok(loaded("A")) },
            async { Err("HTTP error: 500".to_string()) },
            async { Ok(loaded("C")) },
        ));

        // No partial result: the successful fetches are discarded
        assert_eq!(result.unwrap_err(), "HTTP error: 500");
    }

    #[test]
    fn failure_message_is_surfaced_verbatim() {
        let result = block_on(join_branches(
            async { Err("Request failed: connection refused".to_string()) },
            async { Ok(loaded("B")) },
            async { Ok(loaded("C")) },
        ));

        assert_eq!(result.unwrap_err(), "Request failed: connection refused");
    }
}
