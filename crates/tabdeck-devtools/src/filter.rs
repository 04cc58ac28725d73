//! URL classification and capture naming.

/// The URL up to the query string or fragment.
fn url_path(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

fn last_segment(url: &str) -> &str {
    url_path(url).rsplit('/').next().unwrap_or("")
}

/// Whether `url` names a file with one of `extensions` (without the dot,
/// case-insensitive).
pub fn is_image_url(url: &str, extensions: &[String]) -> bool {
    let Some((_, ext)) = last_segment(url).rsplit_once('.') else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File name for a captured body: the URL's last path segment, or
/// `<request_id>.bin` when the URL has none.
pub fn capture_file_name(url: &str, request_id: &str) -> String {
    let name = sanitize(last_segment(url));
    if name.trim_matches('.').is_empty() {
        format!("{}.bin", sanitize(request_id))
    } else {
        name
    }
}
