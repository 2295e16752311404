use contracts::domain::branch_sales::{join_branches, BranchDataset, Branches};
use gloo_net::http::Request;

const API_BASE: &str = "/api";

/// Fetch one branch's sales document.
pub async fn fetch_branch(source: &str) -> Result<BranchDataset, String> {
    let url = format!("{}/{}", API_BASE, source);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: BranchDataset = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch all three branches together. Fails as a whole if any source fails.
pub async fn load_branches() -> Result<Branches, String> {
    join_branches(
        fetch_branch("branch1.json"),
        fetch_branch("branch2.json"),
        fetch_branch("branch3.json"),
    )
    .await
}
