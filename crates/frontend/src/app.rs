use leptos::prelude::*;

use crate::domain::branch_sales::ui::ProductRevenueList;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ProductRevenueList />
    }
}
