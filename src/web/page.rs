//! The single HTML page: the URL form plus an optional flash message.

/// Message shown above the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Info(String),
    Error(String),
}

pub fn render(tweet_url: &str, flash: Option<&Flash>) -> String {
    let flash_html = match flash {
        Some(Flash::Info(text)) => format!(r#"<p class="flash">{}</p>"#, escape_html(text)),
        Some(Flash::Error(text)) => {
            format!(r#"<p class="flash error">{}</p>"#, escape_html(text))
        }
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Reply Draw</title>
</head>
<body>
<h1>Pick a winner from the replies</h1>
{flash_html}
<form method="post" action="/">
<label for="tweet_url">Tweet URL</label>
<input type="text" id="tweet_url" name="tweet_url" value="{url}" required>
<button type="submit">Draw</button>
</form>
</body>
</html>
"#,
        flash_html = flash_html,
        url = escape_html(tweet_url),
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
