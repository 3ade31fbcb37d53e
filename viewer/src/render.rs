//! Markup fragments for the three queue states. Pure string-in/string-out so
//! the same rendering feeds the HTML snapshot writer and the tests.

use crate::models::queue::Song;

/// HTML-escape a string to prevent XSS.
///
/// Escapes: & < > " '
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Milliseconds to `m:ss`. Minutes are unbounded (a 2-hour mix shows as
/// "120:00"), seconds always two digits.
pub fn format_duration(milliseconds: u64) -> String {
    let total_seconds = milliseconds / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Requester line: performer glyph + display name when the service resolved
/// one, otherwise the generic-user glyph with the raw id.
pub fn format_requester(song: &Song) -> String {
    match &song.requester_name {
        Some(name) => format!("🎤 {}", html_escape(name)),
        None => format!("👤 User: {}", html_escape(&song.requester)),
    }
}

pub fn render_error(message: &str) -> String {
    format!(
        r#"<div class="error">Error loading queue: {}</div>"#,
        html_escape(message)
    )
}

pub fn render_empty() -> String {
    r#"<div class="empty-queue"><p>🎵 The queue is currently empty</p></div>"#.to_string()
}

/// The Populated state: a 1-indexed list, one item per queued song.
pub fn render_queue(songs: &[Song]) -> String {
    let mut html = String::from(r#"<ul class="queue-list">"#);

    for (index, song) in songs.iter().enumerate() {
        let link = match &song.uri {
            Some(uri) => format!(
                r#"<a href="{}" target="_blank" rel="noopener" class="song-link">🎵 Open in Spotify</a>"#,
                html_escape(uri)
            ),
            None => String::new(),
        };

        html.push_str(&format!(
            r#"
<li class="queue-item">
  <span class="queue-item-number">{}</span>
  <div class="song-info">
    <div class="song-title">{}</div>
    <div class="song-author">by {}</div>
    <div class="song-details">
      <span class="song-duration">⏱️ {}</span>
      <span class="song-requester">{}</span>
      {}
    </div>
  </div>
</li>"#,
            index + 1,
            html_escape(&song.title),
            html_escape(&song.author),
            format_duration(song.duration),
            format_requester(song),
            link
        ));
    }

    html.push_str("\n</ul>");
    html
}

/// Wrap the current page fragments in a complete document, standing in for
/// the queue page template the fragments would otherwise be injected into.
pub fn render_document(heading: &str, server_name: Option<&str>, queue_content: &str) -> String {
    let server_name_block = match server_name {
        Some(name) => format!(r#"<div id="server-name">{}</div>"#, html_escape(name)),
        None => r#"<div id="server-name" style="display: none;"></div>"#.to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
</head>
<body>
    <h1>{}</h1>
    {}
    <div id="queue-container">
{}
    </div>
</body>
</html>
"#,
        html_escape(heading),
        html_escape(heading),
        server_name_block,
        queue_content
    )
}
