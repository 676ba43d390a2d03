//! Video URL classification shared by the video section and video columns.

use regex::Regex;
use std::sync::LazyLock;

static YOUTUBE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("invalid youtube regex")
});

const YOUTUBE_ID_LEN: usize = 11;

/// How a video URL is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource<'a> {
    /// Hosted video, embedded by its 11-character id
    YouTube(String),
    /// Anything else is played directly
    File(&'a str),
}

impl<'a> VideoSource<'a> {
    pub fn classify(url: &'a str) -> Self {
        match youtube_id(url) {
            Some(id) => VideoSource::YouTube(id),
            None => VideoSource::File(url),
        }
    }
}

/// Extract the video id from a YouTube watch, share, embed or legacy URL
pub fn youtube_id(url: &str) -> Option<String> {
    let id = YOUTUBE_ID_RE.captures(url)?.get(1)?.as_str();
    (id.chars().count() == YOUTUBE_ID_LEN).then(|| id.to_string())
}

pub fn youtube_embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_id_forms() {
        for url in [
            "https://youtu.be/LXb3EKWsInQ",
            "https://www.youtube.com/watch?v=LXb3EKWsInQ",
            "https://www.youtube.com/watch?feature=share&v=LXb3EKWsInQ",
            "https://www.youtube.com/embed/LXb3EKWsInQ?autoplay=1",
            "https://www.youtube.com/v/LXb3EKWsInQ",
        ] {
            assert_eq!(youtube_id(url).as_deref(), Some("LXb3EKWsInQ"), "{}", url);
        }
    }

    #[test]
    fn test_non_youtube_urls() {
        assert_eq!(youtube_id("https://cdn.example.com/clips/intro.mp4"), None);
        assert_eq!(youtube_id(""), None);
        // id present but not 11 characters
        assert_eq!(youtube_id("https://youtu.be/short"), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            VideoSource::classify("https://youtu.be/LXb3EKWsInQ"),
            VideoSource::YouTube("LXb3EKWsInQ".to_string())
        );
        assert_eq!(
            VideoSource::classify("movie.mp4"),
            VideoSource::File("movie.mp4")
        );
    }
}
