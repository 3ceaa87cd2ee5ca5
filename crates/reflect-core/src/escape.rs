/// Escapes the five HTML-reserved characters so remote text can be
/// interpolated into markup as inert content.
#[must_use]
pub fn escape_html(
  raw: &str
) -> String {
  let mut out =
    String::with_capacity(raw.len());
  for ch in raw.chars() {
    match ch {
      | '&' => out.push_str("&amp;"),
      | '<' => out.push_str("&lt;"),
      | '>' => out.push_str("&gt;"),
      | '"' => out.push_str("&quot;"),
      | '\'' => out.push_str("&#039;"),
      | other => out.push(other)
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::escape_html;

  #[test]
  fn replaces_all_reserved_characters()
  {
    let escaped = escape_html(
      "<script>&\"'</script>"
    );
    assert_eq!(
      escaped,
      "&lt;script&gt;&amp;&quot;&#039;\
       &lt;/script&gt;"
    );
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert!(!escaped.contains('"'));
    assert!(!escaped.contains('\''));
  }

  #[test]
  fn ampersand_is_escaped_once() {
    assert_eq!(
      escape_html("&lt;"),
      "&amp;lt;"
    );
  }

  #[test]
  fn leaves_plain_text_and_emoji_alone(
  ) {
    assert_eq!(
      escape_html("Make coffee ☕"),
      "Make coffee ☕"
    );
  }
}
