//! Text and JSON output for condensed trails

use serde::Serialize;

use crate::condense::{Condensed, Crumb};
use crate::core::{Settings, CHILDREN_MARKER, DEFAULT_ELLIPSIS, DEFAULT_SEPARATOR, HIDDEN_PREFIX};
use crate::trail::Breadcrumb;

/// Glyphs used to draw a trail on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    pub separator: String,
    pub ellipsis: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl From<&Settings> for RenderStyle {
    fn from(settings: &Settings) -> Self {
        Self {
            separator: settings.separator.clone(),
            ellipsis: settings.ellipsis.clone(),
        }
    }
}

/// Formats one breadcrumb: icon, title, children marker; disabled in parentheses
pub fn render_crumb(crumb: &Breadcrumb) -> String {
    let mut text = match &crumb.icon {
        Some(icon) => format!("{icon} {}", crumb.title()),
        None => crumb.title().to_string(),
    };

    if crumb.has_children() {
        text.push(' ');
        text.push_str(CHILDREN_MARKER);
    }

    if crumb.disabled {
        format!("({text})")
    } else {
        text
    }
}

/// Joins the visible slots into a single line
pub fn render_line(condensed: &Condensed<'_, Breadcrumb>, style: &RenderStyle) -> String {
    condensed
        .crumbs
        .iter()
        .map(|slot| match slot {
            Crumb::Item(crumb) => render_crumb(crumb),
            Crumb::Ellipsis => style.ellipsis.clone(),
        })
        .collect::<Vec<_>>()
        .join(&style.separator)
}

/// Lists the elided entries, or `None` when nothing was condensed
pub fn render_hidden(condensed: &Condensed<'_, Breadcrumb>) -> Option<String> {
    let hidden = condensed.hidden?;
    let titles: Vec<String> = hidden.iter().map(render_crumb).collect();
    Some(format!("{} {} {}", HIDDEN_PREFIX, hidden.len(), titles.join(", ")).trim_end().to_string())
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonSlot<'a> {
    Item(&'a Breadcrumb),
    Ellipsis { ellipsis: bool },
}

#[derive(Serialize)]
struct JsonView<'a> {
    crumbs: Vec<JsonSlot<'a>>,
    hidden: Option<&'a [Breadcrumb]>,
}

/// Machine-readable view: `{"crumbs": [...], "hidden": [...] | null}`
pub fn to_json(condensed: &Condensed<'_, Breadcrumb>) -> serde_json::Result<String> {
    let view = JsonView {
        crumbs: condensed
            .crumbs
            .iter()
            .map(|slot| match slot {
                Crumb::Item(crumb) => JsonSlot::Item(*crumb),
                Crumb::Ellipsis => JsonSlot::Ellipsis { ellipsis: true },
            })
            .collect(),
        hidden: condensed.hidden,
    };
    serde_json::to_string_pretty(&view)
}
