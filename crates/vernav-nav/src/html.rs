//! HTML fragments for the selector control and the outdated banner.
//!
//! The embedding page carries a static version label and a hidden dropdown;
//! when the navigator reaches `Ready` it swaps their visibility and fills
//! the dropdown with the markup produced here.

use std::fmt::Write;

use crate::selector::VersionSelector;

/// Element identifier of the version dropdown control.
pub const DROPDOWN_ID: &str = "ver-dropdown";
/// Element identifier of the static version label (hidden once ready).
pub const STATIC_LABEL_ID: &str = "version-static";
/// Element identifier of the dropdown's container (shown once ready).
pub const DYNAMIC_LABEL_ID: &str = "version-dynamic";

/// Render the dropdown's option list as a `<select>` element.
///
/// The option at the tracked selection index carries the `selected`
/// attribute; values and labels are escaped.
#[must_use]
pub fn render_dropdown(selector: &VersionSelector) -> String {
    let mut out = String::new();
    write!(out, r#"<select id="{DROPDOWN_ID}">"#).unwrap();
    for (index, option) in selector.options.iter().enumerate() {
        let selected = if index == selector.selected_index {
            " selected"
        } else {
            ""
        };
        write!(
            out,
            r#"<option value="{}"{selected}>{}</option>"#,
            escape_html(&option.value),
            escape_html(&option.label)
        )
        .unwrap();
    }
    out.push_str("</select>");
    out
}

/// Render the warning banner shown on outdated versions.
///
/// `latest_path` is the already-computed path of the equivalent page under
/// the latest version.
#[must_use]
pub fn outdated_banner(latest_path: &str) -> String {
    format!(
        concat!(
            r#"<div class="admonition warning">"#,
            r#"<p class="first admonition-title">Note</p>"#,
            r#"<p class="last">You are browsing the documentation for an obsolete version. "#,
            r#"<a href="{}">Click here</a> to go to the latest version.</p></div>"#
        ),
        escape_html(latest_path)
    )
}

/// Escape text for use in HTML content and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
