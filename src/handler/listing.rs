//! Directory listing for directories without an index document

use std::fmt::Write as _;
use std::io;
use std::path::Path;
use tokio::fs;

/// Render a minimal HTML listing of `dir`, entries sorted by name
///
/// Sub-directories carry a trailing `/` so relative links keep working.
pub async fn render_listing(dir: &Path) -> io::Result<String> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    let mut html = String::from(
        "<!doctype html>\n<meta name=\"viewport\" content=\"width=device-width\">\n<pre>\n",
    );
    for name in &names {
        let _ = writeln!(
            html,
            "<a href=\"{}\">{}</a>",
            encode_href(name),
            escape_html(name)
        );
    }
    html.push_str("</pre>\n");
    Ok(html)
}

/// Percent-encode a relative link, leaving `/` and unreserved characters
fn encode_href(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for b in name.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~' | b'/') {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
