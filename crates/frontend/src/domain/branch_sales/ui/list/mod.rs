use contracts::domain::branch_sales::{build_revenue_table, Branches, RevenueTable};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::branch_sales::api;
use crate::domain::branch_sales::intl::{IntlCollator, IntlNumberFormat};
use crate::shared::search_input::SearchInput;

#[component]
#[allow(non_snake_case)]
pub fn ProductRevenueList() -> impl IntoView {
    let (branches, set_branches) = signal(Branches::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (query, set_query) = signal(String::new());

    // Intl handles are plain JS values (not Send+Sync), store locally
    let collator = StoredValue::new_local(IntlCollator::new());
    let number_format = StoredValue::new_local(IntlNumberFormat::new());

    // Load all three branches on mount
    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::load_branches().await {
                Ok(data) => {
                    set_branches.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load branch sales: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    // Filter, sort, total and format in one pass per change
    let revenue_table = move || -> RevenueTable {
        collator.with_value(|collator| {
            number_format.with_value(|format| {
                build_revenue_table(&branches.get(), &query.get(), collator, format)
            })
        })
    };

    view! {
        <div class="product-list">
            {move || {
                if loading.get() {
                    view! { <p>"Loading..."</p> }.into_any()
                } else if let Some(err) = error.get() {
                    view! { <p>{format!("Error: {}", err)}</p> }.into_any()
                } else {
                    view! {
                        <div>
                            <h1>"Our Products"</h1>
                            <SearchInput
                                value=query
                                on_change=Callback::new(move |val: String| set_query.set(val))
                                placeholder="Search by product name..."
                            />
                            <table>
                                <thead>
                                    <tr>
                                        <th>"Product"</th>
                                        <th>"Revenue"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let table = revenue_table();
                                        if table.rows.is_empty() {
                                            view! {
                                                <tr>
                                                    <td>"No products found."</td>
                                                    <td>"N/A"</td>
                                                </tr>
                                            }
                                            .into_any()
                                        } else {
                                            table
                                                .rows
                                                .into_iter()
                                                .map(|row| {
                                                    view! {
                                                        <tr>
                                                            <td>{row.name}</td>
                                                            <td>{row.revenue}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                    }}
                                </tbody>
                                <tfoot>
                                    <tr>
                                        <td>"Total"</td>
                                        <td>{move || revenue_table().total}</td>
                                    </tr>
                                </tfoot>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
