use leptos::ev;
use leptos::prelude::*;

/// Index after `current`, wrapping to the first screenshot.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Index before `current`, wrapping to the last screenshot.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// Thumbnail grid with a full-screen lightbox.
#[component]
pub fn ScreenshotGallery(
    screenshots: Vec<String>,
    #[prop(into)] title: String,
    #[prop(into)] color: String,
) -> impl IntoView {
    let len = screenshots.len();
    let (selected, set_selected) = signal::<Option<usize>>(None);

    let thumbnails = screenshots
        .iter()
        .enumerate()
        .map(|(i, src)| {
            view! {
                <button class="screenshot-thumb" on:click=move |_| set_selected.set(Some(i))>
                    <img src=src.clone() alt=format!("{} screenshot {}", title, i + 1) loading="lazy" />
                    <span class="screenshot-zoom" style=format!("background-color: {}", color)>
                        "+"
                    </span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let shots = StoredValue::new(screenshots);
    let alt = format!("{} screenshot", title);

    let lightbox = move || {
        let index = selected.get()?;
        let src = shots.with_value(|s| s.get(index).cloned())?;
        let dots = (0..len)
            .map(|i| {
                let style = if i == index {
                    format!("background-color: {}", color)
                } else {
                    String::new()
                };
                view! {
                    <button
                        class="lightbox-dot"
                        class:active={i == index}
                        style=style
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            set_selected.set(Some(i));
                        }
                    ></button>
                }
            })
            .collect::<Vec<_>>();

        Some(view! {
            <div class="lightbox" on:click=move |_| set_selected.set(None)>
                <button
                    class="lightbox-close"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        set_selected.set(None);
                    }
                >
                    "\u{2715}"
                </button>
                <button
                    class="lightbox-nav lightbox-prev"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        set_selected.set(Some(prev_index(index, len)));
                    }
                >
                    "\u{2039}"
                </button>
                <img
                    class="lightbox-image"
                    src=src
                    alt=alt.clone()
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                />
                <button
                    class="lightbox-nav lightbox-next"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        set_selected.set(Some(next_index(index, len)));
                    }
                >
                    "\u{203A}"
                </button>
                <div class="lightbox-dots">{dots}</div>
            </div>
        })
    };

    view! {
        <div class="screenshot-grid">{thumbnails}</div>
        {lightbox}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        assert_eq!(prev_index(1, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
