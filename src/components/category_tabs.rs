use leptos::prelude::*;

use crate::catalog::CategoryFilter;

#[component]
pub fn CategoryTabs(
    /// Currently selected tab.
    #[prop(into)]
    selected: Signal<CategoryFilter>,
    #[prop(into)] on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    let tabs = CategoryFilter::TABS
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="tab"
                    class:active=move || selected.get() == tab
                    on:click=move |_| on_select.run(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="category-tabs">{tabs}</div> }
}
