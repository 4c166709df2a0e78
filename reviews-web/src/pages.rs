//! HTML page rendering
//!
//! Pages are plain `format!` templates sharing one layout. Every value that
//! came from storage or a request goes through `escape_html`.

use axum::http::StatusCode;
use reviews_common::models::MAX_TITLE_LEN;
use reviews_common::{Rating, Review};

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            max-width: 760px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }
        header { border-bottom: 1px solid #ccc; margin-bottom: 20px; }
        header a { margin-right: 12px; }
        .review { border-bottom: 1px solid #eee; padding: 10px 0; }
        .rating { color: #b8860b; font-weight: 600; }
        .actions a { margin-right: 10px; font-size: 14px; }
        label { display: block; margin-top: 12px; font-weight: 600; }
        input[type=text], textarea { width: 100%; box-sizing: border-box; }
        textarea { min-height: 140px; }
        .error { color: #a00; }
"#;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <header>
        <h1>Movie Reviews</h1>
        <nav><a href="/">All reviews</a><a href="/create/">Write a review</a></nav>
    </header>
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
        body = body,
    )
}

fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, Rating::MAX) as usize;
    let empty = Rating::MAX as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// GET / - all reviews
pub fn index_page(reviews: &[Review]) -> String {
    let body = if reviews.is_empty() {
        r#"        <p>No reviews yet. <a href="/create/">Write the first one.</a></p>"#.to_string()
    } else {
        reviews
            .iter()
            .map(|review| {
                format!(
                    r#"        <div class="review">
            <h2><a href="/review/{id}">{title}</a></h2>
            <div class="rating" title="{rating} / {max}">{stars}</div>
            <div class="actions">
                <a href="/edit/{id}">Edit</a>
                <a href="/delete/{id}">Delete</a>
            </div>
        </div>"#,
                    id = review.id,
                    title = escape_html(&review.title),
                    rating = review.rating,
                    max = Rating::MAX,
                    stars = stars(review.rating),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    layout("Movie Reviews", &body)
}

/// GET /review/:id - one review
pub fn review_page(review: &Review) -> String {
    let body = format!(
        r#"        <article>
            <h2>{title}</h2>
            <div class="rating">{stars} ({rating} / {max})</div>
            <p>{text}</p>
        </article>
        <div class="actions">
            <a href="/edit/{id}">Edit</a>
            <a href="/delete/{id}">Delete</a>
        </div>"#,
        id = review.id,
        title = escape_html(&review.title),
        stars = stars(review.rating),
        rating = review.rating,
        max = Rating::MAX,
        text = escape_html(&review.text),
    );

    layout(&review.title, &body)
}

/// GET /create/ - blank form
pub fn create_page() -> String {
    let body = format!(
        r#"        <h2>Write a review</h2>
        <form method="post" action="/create/">
            <label for="title">Title</label>
            <input type="text" id="title" name="title" maxlength="{max_title}" required>
{fields}
            <p><button type="submit">Save</button></p>
        </form>"#,
        max_title = MAX_TITLE_LEN,
        fields = text_and_rating_fields("", Rating::MIN),
    );

    layout("Write a review", &body)
}

/// GET /edit/:id - form pre-populated from the stored review
///
/// The title is shown but not submitted; edits only change text and rating.
pub fn edit_page(review: &Review) -> String {
    let body = format!(
        r#"        <h2>Edit review</h2>
        <form method="post" action="/edit/{id}">
            <label>Title</label>
            <p>{title}</p>
{fields}
            <p><button type="submit">Save</button></p>
        </form>"#,
        id = review.id,
        title = escape_html(&review.title),
        fields = text_and_rating_fields(&review.text, review.rating),
    );

    layout(&format!("Edit: {}", review.title), &body)
}

fn text_and_rating_fields(text: &str, rating: i64) -> String {
    format!(
        r#"            <label for="text">Review</label>
            <textarea id="text" name="text" required>{text}</textarea>
            <label for="rating">Rating ({min}-{max})</label>
            <input type="number" id="rating" name="rating" min="{min}" max="{max}" value="{rating}" required>"#,
        text = escape_html(text),
        min = Rating::MIN,
        max = Rating::MAX,
        rating = rating,
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"        <h2 class="error">{code} {reason}</h2>
        <p>{message}</p>"#,
        code = status.as_u16(),
        reason = reason,
        message = escape_html(message),
    );

    layout(reason, &body)
}
