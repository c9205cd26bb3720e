//! Breadcrumb condensation
//!
//! Collapses the middle of an ordered sequence into a single ellipsis so the
//! result fits a display budget. The ellipsis counts as one slot of the budget.
//!
//! ```
//! use crumbs::{condense, Crumb, EllipsisPosition};
//!
//! let items = ["home", "docs", "guides", "rust", "intro"];
//! let condensed = condense(&items, Some(4), EllipsisPosition::End);
//!
//! assert_eq!(
//!     condensed.crumbs,
//!     vec![Crumb::Item(&"home"), Crumb::Item(&"docs"), Crumb::Ellipsis, Crumb::Item(&"intro")]
//! );
//! assert_eq!(condensed.hidden, Some(&items[2..4]));
//! ```

mod position;

pub use position::EllipsisPosition;

/// One visible slot of a condensed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crumb<T> {
    Item(T),
    /// Stands in for the hidden run
    Ellipsis,
}

impl<T> Crumb<T> {
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    pub fn item(&self) -> Option<&T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Ellipsis => None,
        }
    }
}

/// Result of [`condense`], borrowing from the input items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensed<'a, T> {
    /// Visible slots in display order
    pub crumbs: Vec<Crumb<&'a T>>,
    /// The elided items, present only when condensation happened
    pub hidden: Option<&'a [T]>,
}

impl<'a, T> Condensed<'a, T> {
    fn unchanged(items: &'a [T]) -> Self {
        Self {
            crumbs: items.iter().map(Crumb::Item).collect(),
            hidden: None,
        }
    }

    pub fn is_condensed(&self) -> bool {
        self.hidden.is_some()
    }

    /// Items shown before the ellipsis (all items when not condensed)
    pub fn head(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.crumbs
            .iter()
            .take_while(|crumb| !crumb.is_ellipsis())
            .filter_map(|crumb| crumb.item().copied())
    }

    /// Items shown after the ellipsis
    pub fn tail(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.crumbs
            .iter()
            .skip_while(|crumb| !crumb.is_ellipsis())
            .filter_map(|crumb| crumb.item().copied())
    }

    pub fn hidden_len(&self) -> usize {
        self.hidden.map_or(0, <[T]>::len)
    }
}

/// Condenses `items` to at most `max_items` visible slots
///
/// `None` or `Some(0)` means no limit. Budgets of 1 or 2 still keep one item on
/// each side of the ellipsis, so the result has three slots.
pub fn condense<T>(items: &[T], max_items: Option<usize>, position: EllipsisPosition) -> Condensed<'_, T> {
    let len = items.len();
    let max_items = match max_items {
        Some(max) if max > 0 && max < len => max,
        _ => return Condensed::unchanged(items),
    };

    let (head, tail) = position.split(max_items);
    // head + tail never exceeds len here, since len > max_items >= 1
    let tail_start = len - tail;

    let mut crumbs = Vec::with_capacity(head + 1 + (len - tail_start));
    crumbs.extend(items[..head].iter().map(Crumb::Item));
    crumbs.push(Crumb::Ellipsis);
    crumbs.extend(items[tail_start..].iter().map(Crumb::Item));

    Condensed {
        crumbs,
        hidden: Some(&items[head..tail_start]),
    }
}
