use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Wraps content that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(
    /// Extra classes for the wrapper.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if !visible.get_untracked() {
            observe_once(&el, set_visible);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {}", class)
            class:visible=move || visible.get()
        >
            {children()}
        </div>
    }
}

fn observe_once(el: &web_sys::Element, set_visible: WriteSignal<bool>) {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if hit {
                set_visible.set(true);
                observer.disconnect();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin("0px 0px -100px 0px");

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            callback.forget();
        }
        Err(_) => {
            tracing::debug!("IntersectionObserver unavailable, revealing immediately");
            set_visible.set(true);
        }
    }
}
