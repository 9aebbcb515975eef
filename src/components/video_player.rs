use leptos::prelude::*;

/// File extensions played with a native `<video>` element.
const LOCAL_VIDEO_EXTENSIONS: [&str; 3] = [".webm", ".mp4", ".ogg"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// A video file served with the site.
    File(String),
    /// A hosted player URL, already set to autoplay.
    Embed(String),
}

impl VideoSource {
    pub fn from_url(url: &str) -> Self {
        let lower = url.to_lowercase();
        if LOCAL_VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            VideoSource::File(url.to_string())
        } else {
            let separator = if url.contains('?') { '&' } else { '?' };
            VideoSource::Embed(format!("{}{}autoplay=1", url, separator))
        }
    }
}

/// Poster with a play button that swaps in the player on click.
#[component]
pub fn VideoPlayer(#[prop(into)] url: String, #[prop(into)] color: String) -> impl IntoView {
    let (is_playing, set_is_playing) = signal(false);
    let source = VideoSource::from_url(&url);

    let player = move || match source.clone() {
        VideoSource::File(src) => view! {
            <video class="demo-video" src=src controls=true autoplay=true></video>
        }
        .into_any(),
        VideoSource::Embed(src) => view! {
            <iframe
                class="demo-video"
                src=src
                title="Demo Video"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen=true
            ></iframe>
        }
        .into_any(),
    };

    view! {
        <div class="video-player">
            <Show
                when=move || is_playing.get()
                fallback=move || {
                    view! {
                        <button class="video-poster" on:click=move |_| set_is_playing.set(true)>
                            <span class="play-button" style=format!("background-color: {}", color)>
                                "\u{25B6}"
                            </span>
                            <span class="video-caption">"Watch Demo"</span>
                        </button>
                    }
                }
            >
                {player.clone()}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_files_play_natively() {
        assert_eq!(
            VideoSource::from_url("/videos/demo.webm"),
            VideoSource::File("/videos/demo.webm".to_string())
        );
        assert!(matches!(VideoSource::from_url("/v/demo.MP4"), VideoSource::File(_)));
        assert!(matches!(VideoSource::from_url("/v/demo.ogg"), VideoSource::File(_)));
    }

    #[test]
    fn test_hosted_players_embed_with_autoplay() {
        assert_eq!(
            VideoSource::from_url("https://www.youtube.com/embed/abc"),
            VideoSource::Embed("https://www.youtube.com/embed/abc?autoplay=1".to_string())
        );
        assert_eq!(
            VideoSource::from_url("https://player.vimeo.com/video/1?h=x"),
            VideoSource::Embed("https://player.vimeo.com/video/1?h=x&autoplay=1".to_string())
        );
    }
}
