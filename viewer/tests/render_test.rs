use queuewatch_viewer::models::queue::Song;
use queuewatch_viewer::render::{
    format_duration, format_requester, html_escape, render_document, render_empty, render_error,
    render_queue,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_song(title: &str) -> Song {
        Song {
            title: title.to_string(),
            author: "Test Artist".to_string(),
            duration: 65000,
            requester: "42".to_string(),
            requester_name: None,
            uri: None,
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(999), "0:00"); // sub-second truncates
        assert_eq!(format_duration(59000), "0:59");
        assert_eq!(format_duration(60000), "1:00");
        assert_eq!(format_duration(125000), "2:05");
        // minutes are unbounded, never rolled into hours
        assert_eq!(format_duration(3661000), "61:01");
    }

    #[test]
    fn test_format_duration_is_monotonic() {
        let samples = [0u64, 500, 999, 1000, 59000, 59999, 60000, 125000, 3661000];
        for window in samples.windows(2) {
            let (a, b) = (window[0], window[1]);
            let (fa, fb) = (format_duration(a), format_duration(b));
            // m:ss compares correctly once padded to equal length
            let fa_key = format!("{:>8}", fa);
            let fb_key = format!("{:>8}", fb);
            assert!(
                fa_key <= fb_key,
                "{} ms -> {} vs {} ms -> {}",
                a,
                fa,
                b,
                fb
            );
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("plain text"), "plain text");
        assert_eq!(html_escape("<b>X</b>"), "&lt;b&gt;X&lt;/b&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape(r#""quo" 'ted'"#), "&quot;quo&quot; &#x27;ted&#x27;");
    }

    #[test]
    fn test_error_state() {
        let html = render_error("boom");
        assert!(html.contains("boom"));
        assert!(html.contains("Error loading queue:"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let html = render_error("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_state() {
        let html = render_empty();
        assert!(html.contains("🎵 The queue is currently empty"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn test_title_and_author_are_escaped() {
        let mut song = create_test_song("<b>X</b>");
        song.author = "A & B".to_string();
        let html = render_queue(&[song]);

        assert!(!html.contains("<b>X</b>"));
        assert!(html.contains("&lt;b&gt;X&lt;/b&gt;"));
        assert!(html.contains("by A &amp; B"));
        assert!(html.contains("1:05"));
    }

    #[test]
    fn test_requester_forms() {
        let song = create_test_song("Song One");
        assert_eq!(format_requester(&song), "👤 User: 42");

        let mut named = create_test_song("Song Two");
        named.requester_name = Some("Alice".to_string());
        assert_eq!(format_requester(&named), "🎤 Alice");

        // display names come from chat, escape them like everything else
        named.requester_name = Some("<Alice>".to_string());
        assert_eq!(format_requester(&named), "🎤 &lt;Alice&gt;");
    }

    #[test]
    fn test_items_are_one_indexed() {
        let songs = vec![create_test_song("First"), create_test_song("Second")];
        let html = render_queue(&songs);

        assert!(html.contains(r#"<span class="queue-item-number">1</span>"#));
        assert!(html.contains(r#"<span class="queue-item-number">2</span>"#));
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_optional_link() {
        let mut song = create_test_song("Linked");
        song.uri = Some("https://open.spotify.com/track/x?a=1&b=2".to_string());
        let html = render_queue(&[song]);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("🎵 Open in Spotify"));
        // query ampersand must be escaped inside the attribute
        assert!(html.contains("a=1&amp;b=2"));

        let plain = render_queue(&[create_test_song("Unlinked")]);
        assert!(!plain.contains("<a href"));
    }

    #[test]
    fn test_document_wrapper() {
        let doc = render_document("Music Queue - Server 42", None, &render_empty());
        assert!(doc.contains("<title>Music Queue - Server 42</title>"));
        assert!(doc.contains(r#"style="display: none;""#));

        let doc = render_document("Music Queue", Some("Crowley's Den"), "<ul></ul>");
        assert!(doc.contains("Crowley&#x27;s Den"));
        assert!(!doc.contains(r#"style="display: none;""#));
    }
}
