//! File system path breadcrumbs

use std::path::{Component, Path, PathBuf};

use crate::core::{HOME_LABEL, ROOT_LABEL};
use crate::trail::{Breadcrumb, Trail};

/// Splits a path into breadcrumbs, one per component
///
/// Each crumb's `href` is the cumulative path up to and including it. When
/// `home` is given and the path lies under it, the home directory collapses
/// into a single `~` crumb. A home of `/` is ignored. `.` components are dropped.
pub fn path_to_breadcrumbs(path: &Path, home: Option<&Path>) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::new();
    let mut current = PathBuf::new();
    let mut rest = path;

    // parent() is None for both "" and the root directory
    if let Some(home) = home.filter(|h| h.parent().is_some()) {
        if let Ok(stripped) = path.strip_prefix(home) {
            crumbs.push(Breadcrumb::new(HOME_LABEL).with_href(home.display().to_string()));
            current = home.to_path_buf();
            rest = stripped;
        }
    }

    for component in rest.components() {
        let label = match component {
            Component::CurDir => continue,
            Component::RootDir => ROOT_LABEL.to_string(),
            Component::Prefix(prefix) => prefix.as_os_str().to_string_lossy().into_owned(),
            Component::ParentDir | Component::Normal(_) => {
                component.as_os_str().to_string_lossy().into_owned()
            }
        };
        current.push(component);
        crumbs.push(Breadcrumb::new(label).with_href(current.display().to_string()));
    }

    crumbs
}

/// Builds a trail from a path, ready to condense
pub fn path_trail(path: &Path, home: Option<&Path>) -> Trail {
    Trail::new(path_to_breadcrumbs(path, home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condense::EllipsisPosition;
    use crate::render::{render_line, RenderStyle};
    use crate::trail::CondenseOptions;

    fn labels(crumbs: &[Breadcrumb]) -> Vec<&str> {
        crumbs.iter().map(Breadcrumb::title).collect()
    }

    #[test]
    fn test_absolute_path() {
        let crumbs = path_to_breadcrumbs(Path::new("/usr/local/lib"), None);
        assert_eq!(labels(&crumbs), vec!["/", "usr", "local", "lib"]);
        assert_eq!(crumbs[0].href.as_deref(), Some("/"));
        assert_eq!(crumbs[3].href.as_deref(), Some("/usr/local/lib"));
    }

    #[test]
    fn test_relative_path_drops_cur_dir() {
        let crumbs = path_to_breadcrumbs(Path::new("./src/../tests"), None);
        assert_eq!(labels(&crumbs), vec!["src", "..", "tests"]);
        assert_eq!(crumbs[2].href.as_deref(), Some("src/../tests"));
    }

    #[test]
    fn test_home_substitution() {
        let home = Path::new("/home/alex");
        let crumbs = path_to_breadcrumbs(Path::new("/home/alex/projects/crumbs"), Some(home));
        assert_eq!(labels(&crumbs), vec!["~", "projects", "crumbs"]);
        assert_eq!(crumbs[0].href.as_deref(), Some("/home/alex"));
        assert_eq!(crumbs[2].href.as_deref(), Some("/home/alex/projects/crumbs"));

        let outside = path_to_breadcrumbs(Path::new("/etc/ssh"), Some(home));
        assert_eq!(labels(&outside), vec!["/", "etc", "ssh"]);
    }

    #[test]
    fn test_home_itself() {
        let home = Path::new("/home/alex");
        let crumbs = path_to_breadcrumbs(home, Some(home));
        assert_eq!(labels(&crumbs), vec!["~"]);
    }

    #[test]
    fn test_root_home_is_not_substituted() {
        let crumbs = path_to_breadcrumbs(Path::new("/etc/ssh"), Some(Path::new("/")));
        assert_eq!(labels(&crumbs), vec!["/", "etc", "ssh"]);

        let crumbs = path_to_breadcrumbs(Path::new("/etc/ssh"), Some(Path::new("")));
        assert_eq!(labels(&crumbs), vec!["/", "etc", "ssh"]);
    }

    #[test]
    fn test_path_trail_condenses() {
        let trail = path_trail(Path::new("/srv/www/site/assets/img"), None);
        let condensed = trail.condense(CondenseOptions {
            max_items: Some(4),
            position: EllipsisPosition::End,
        });
        let line = render_line(&condensed, &RenderStyle::default());
        assert_eq!(line, "/ / srv / … / img");
        assert_eq!(condensed.hidden_len(), 3);
    }
}
