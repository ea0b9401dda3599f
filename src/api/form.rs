//! The interactive `/form` page.
//!
//! The page is a fixed document with one substitution point for the
//! participant name. It is rendered once when the router is built.

const FORM_TEMPLATE: &str = include_str!("../../templates/form.html");
const PARTICIPANT_SLOT: &str = "{{ participant }}";

/// Render the form page greeting `participant`.
pub fn render_form(participant: &str) -> String {
    FORM_TEMPLATE.replace(PARTICIPANT_SLOT, &escape_html(participant))
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_posts_to_tokens() {
        let page = render_form("Mark");
        assert!(page.contains("fetch(\"/tokens\""));
        assert!(page.contains("Hello, Mark."));
        assert!(!page.contains(PARTICIPANT_SLOT));
    }

    #[test]
    fn test_participant_is_escaped() {
        let page = render_form("<script>alert('x')</script>");
        assert!(page.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
