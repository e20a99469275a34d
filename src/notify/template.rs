use crate::res;

use super::ConfirmationSnapshot;

pub const SUBJECT: &str = "Appointment Confirmed - Happy Teeth Dental Clinic";

pub fn render_text(snapshot: &ConfirmationSnapshot) -> String {
    fill(res::CONFIRMATION_TEXT, snapshot, |value, out| out.push_str(value))
}

pub fn render_html(snapshot: &ConfirmationSnapshot) -> String {
    fill(res::CONFIRMATION_HTML, snapshot, escape_into)
}

/// Replaces `{field}` tokens in a single pass, so substituted values are never
/// read as template syntax. Unknown tokens are copied through.
fn fill(template: &str, snapshot: &ConfirmationSnapshot, write: impl Fn(&str, &mut String)) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let token = &rest[open..];
        let Some(close) = token.find('}') else {
            break;
        };

        let value = match &token[1..close] {
            "name" => Some(snapshot.name()),
            "service" => Some(snapshot.service()),
            "date" => Some(snapshot.date()),
            "time" => Some(snapshot.time()),
            _ => None,
        };
        match value {
            Some(value) => write(value, &mut out),
            None => out.push_str(&token[..=close]),
        }
        rest = &token[close + 1..];
    }

    // `rest` still starts at an unmatched `{` when the loop broke early
    out.push_str(rest);
    out
}

fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
