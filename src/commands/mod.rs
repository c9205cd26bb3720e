//! Command implementations for the `crumbs` CLI
//!
//! Handlers return the text to print so `main` owns stdout.

pub mod config;
pub mod items;
pub mod path;

use anyhow::Result;
use clap::Args;
use tracing::warn;

use crate::condense::{Condensed, EllipsisPosition};
use crate::core::{resolve_max_items, Settings};
use crate::render::{render_hidden, render_line, to_json, RenderStyle};
use crate::trail::{Breadcrumb, CondenseOptions};

/// Display options shared by the `path` and `items` subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Maximum visible slots including the ellipsis (0 or negative: unlimited)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub max_items: Option<i64>,

    /// Show every item regardless of other limits
    #[arg(long, conflicts_with = "max_items")]
    pub unlimited: bool,

    /// Where the ellipsis goes: start, center or end
    #[arg(short, long)]
    pub position: Option<String>,

    /// Text placed between crumbs
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Text standing in for hidden crumbs
    #[arg(long)]
    pub ellipsis: Option<String>,

    /// Also list the hidden crumbs on a second line
    #[arg(long)]
    pub show_hidden: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Display settings after merging CLI args over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDisplay {
    pub options: CondenseOptions,
    pub style: RenderStyle,
    pub show_hidden: bool,
    pub json: bool,
}

impl DisplayArgs {
    pub fn resolve(&self, settings: &Settings) -> ResolvedDisplay {
        let position = match &self.position {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{e}, using center");
                EllipsisPosition::Center
            }),
            None => settings.ellipsis_position,
        };

        let mut style = RenderStyle::from(settings);
        if let Some(separator) = &self.separator {
            style.separator.clone_from(separator);
        }
        if let Some(ellipsis) = &self.ellipsis {
            style.ellipsis.clone_from(ellipsis);
        }

        ResolvedDisplay {
            options: CondenseOptions {
                max_items: resolve_max_items(self.max_items, self.unlimited, settings.max_items),
                position,
            },
            style,
            show_hidden: self.show_hidden || settings.show_hidden,
            json: self.json,
        }
    }
}

impl ResolvedDisplay {
    /// Formats a condensed trail as text or JSON
    pub fn format(&self, condensed: &Condensed<'_, Breadcrumb>) -> Result<String> {
        if self.json {
            return Ok(to_json(condensed)?);
        }

        let mut output = render_line(condensed, &self.style);
        if self.show_hidden {
            if let Some(hidden) = render_hidden(condensed) {
                output.push('\n');
                output.push_str(&hidden);
            }
        }
        Ok(output)
    }
}
