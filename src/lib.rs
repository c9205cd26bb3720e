//! # crumbs
//!
//! `crumbs` condenses ordered sequences, typically breadcrumb trails, so they
//! fit a display budget. The middle of the sequence collapses into a single
//! ellipsis slot and the hidden items are reported alongside. It powers the
//! `crumbs` CLI.
//!
//! ## Core Features
//!
//! - **Generic Condensation**: [`condense`] works on any slice and borrows its items.
//! - **Ellipsis Placement**: start, center or end, see [`EllipsisPosition`].
//! - **Breadcrumb Trails**: JSON-loadable [`trail::Breadcrumb`] entries with text and JSON rendering.
//! - **Path Display**: filesystem paths split into crumbs with `~` substitution.
//!
//! ## Example
//!
//! ```rust
//! use crumbs::trail::{Breadcrumb, CondenseOptions, Trail};
//! use crumbs::render::{render_line, RenderStyle};
//!
//! let trail: Trail = ["Home", "Docs", "Guides", "Intro"].into_iter().map(Breadcrumb::new).collect();
//! let condensed = trail.condense(CondenseOptions::default());
//! assert_eq!(render_line(&condensed, &RenderStyle::default()), "Home / … / Intro");
//! ```

pub mod commands;
pub mod condense;
pub mod core;
pub mod render;
pub mod trail;
pub mod utils;

pub use condense::{condense, Condensed, Crumb, EllipsisPosition};
