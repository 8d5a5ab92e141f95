//! The counter page served at `/`.

use crate::config::ElementIds;

/// Render the page with the display showing `display_text`.
///
/// Buttons carry `data-control` with their element id; the script posts an
/// activation for that id and writes the returned display text.
pub fn render_page(ids: &ElementIds, display_text: &str) -> String {
    let buttons: String = ids
        .controls()
        .iter()
        .map(|(control, id)| {
            let id = escape(id);
            format!(
                "      <button id=\"{id}\" data-control=\"{id}\">{}</button>\n",
                escape(control.label())
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>tally</title>
  </head>
  <body>
    <h1 id="{display}" data-display>{text}</h1>
    <div>
{buttons}    </div>
    <script>{script}</script>
  </body>
</html>
"#,
        display = escape(&ids.display),
        text = escape(display_text),
        script = SCRIPT,
    )
}

const SCRIPT: &str = r#"
const display = document.querySelector('[data-display]');
document.querySelectorAll('[data-control]').forEach((button) => {
  button.addEventListener('click', async () => {
    const response = await fetch('/api/controls/' + encodeURIComponent(button.dataset.control), { method: 'POST' });
    if (response.ok) {
      const snapshot = await response.json();
      display.textContent = snapshot.display;
    }
  });
});
"#;

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
