use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"404"</h1>
            <p>"This page doesn't exist."</p>
            <a href="/" class="btn btn-primary">"\u{2190} Go back home"</a>
        </div>
    }
}
