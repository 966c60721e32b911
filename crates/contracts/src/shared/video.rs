use once_cell::sync::Lazy;
use regex::Regex;

/// Everything up to the last id marker, then the id itself. The `.` in
/// `youtu.be` is left unescaped so `youtu-be/` style links match as well.
static YOUTUBE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*(youtu.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("youtube url pattern is valid")
});

/// Length of every YouTube video id
const VIDEO_ID_LEN: usize = 11;

/// Extract the video id from a YouTube URL.
///
/// The greedy prefix makes the rightmost marker win. The id runs up to the
/// next `#`, `&` or `?` and must be exactly 11 characters long.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let captures = YOUTUBE_URL_RE.captures(url)?;
    let id = captures.get(2)?.as_str();
    if id.chars().count() == VIDEO_ID_LEN {
        Some(id.to_string())
    } else {
        None
    }
}

/// Embeddable player URL for a video id
pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}
