use leptos::prelude::*;

/// Search box with a clear button. Every keystroke is propagated immediately.
#[component]
pub fn SearchInput(
    /// Current filter value (the input is fully controlled)
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired on every change
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let clear_filter = move |_| {
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style="width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        "×"
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
