//! Build a ResponseHead from raw header lines (as delivered by a curl header callback).

use super::ResponseHead;

/// Parse collected header lines into a ResponseHead.
///
/// A new status line starts a fresh head, so after redirects or `100 Continue`
/// only the final response is kept. Returns `None` when no status line was seen.
pub fn parse_head_lines<S: AsRef<str>>(lines: &[S]) -> Option<ResponseHead> {
    let mut head: Option<ResponseHead> = None;

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        if let Some(status) = parse_status_line(line) {
            head = Some(ResponseHead::new(status));
            continue;
        }
        if let (Some(head), Some((name, value))) = (head.as_mut(), line.split_once(':')) {
            head.headers
                .push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    head
}

/// `HTTP/1.1 429 Too Many Requests` -> 429.
fn parse_status_line(line: &str) -> Option<u32> {
    let rest = line.strip_prefix("HTTP/")?;
    let mut parts = rest.split_whitespace();
    parts.next()?;
    parts.next()?.parse().ok()
}
