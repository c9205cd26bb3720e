//! Breadcrumb trail model
//!
//! A trail is an ordered list of navigation entries, root first. Entries are
//! opaque to [`condense`]: the model only matters to loading and rendering.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::condense::{condense, Condensed, EllipsisPosition};
use crate::core::DEFAULT_MAX_ITEMS;

/// A single navigation entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breadcrumb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Nested entries reachable from this one
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Breadcrumb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn keyed(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Breadcrumb>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Text shown for this entry: the label, else the key
    pub fn title(&self) -> &str {
        if self.label.is_empty() {
            self.key.as_deref().unwrap_or_default()
        } else {
            &self.label
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// How a trail is condensed for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CondenseOptions {
    /// `None` (or `Some(0)`) shows every entry
    pub max_items: Option<usize>,
    pub position: EllipsisPosition,
}

impl Default for CondenseOptions {
    fn default() -> Self {
        Self {
            max_items: Some(DEFAULT_MAX_ITEMS),
            position: EllipsisPosition::Center,
        }
    }
}

/// An ordered breadcrumb trail
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    crumbs: Vec<Breadcrumb>,
}

impl Trail {
    pub fn new(crumbs: Vec<Breadcrumb>) -> Self {
        Self { crumbs }
    }

    /// Parses a JSON array of breadcrumbs; `null` yields an empty trail
    pub fn from_json(json: &str) -> Result<Self> {
        let crumbs: Option<Vec<Breadcrumb>> =
            serde_json::from_str(json).context("expected a JSON array of breadcrumbs")?;
        Ok(Self::new(crumbs.unwrap_or_default()))
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&json)
    }

    pub fn crumbs(&self) -> &[Breadcrumb] {
        &self.crumbs
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn condense(&self, options: CondenseOptions) -> Condensed<'_, Breadcrumb> {
        condense(&self.crumbs, options.max_items, options.position)
    }
}

impl From<Vec<Breadcrumb>> for Trail {
    fn from(crumbs: Vec<Breadcrumb>) -> Self {
        Self::new(crumbs)
    }
}

impl FromIterator<Breadcrumb> for Trail {
    fn from_iter<I: IntoIterator<Item = Breadcrumb>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
