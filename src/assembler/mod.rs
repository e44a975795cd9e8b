//! The aggregation engine: merges per-project declaration sets into one
//! consistent result.
//!
//! [`Assembler`] owns the in-progress merged result. Callers drive it in two
//! strict passes: [`Assembler::fold_dependencies`] for every project first,
//! then [`Assembler::fold_dev_dependencies`] for every project. The two-pass
//! order is load-bearing - dev-dependency promotion decisions must be made
//! against the fully settled dependency set, never a partial one.
//!
//! Folding a package resolves to exactly one of five outcomes, each reported
//! as a single human-readable notification:
//!
//! - **excluded**: the version string matches an exclusion pattern; the pair
//!   is dropped. Exclusion is evaluated per (project, version) pair, so a
//!   later project offering a non-excluded version of the same name fills the
//!   slot as if the package were new.
//! - **added**: first sighting of the name, inserted as declared.
//! - **updated**: the name exists in the same category and the incoming
//!   version takes precedence (see [`precedence::takes_precedence`]).
//! - **skipped**: the existing entry wins; nothing changes.
//! - **promoted**: a dev declaration collides with an existing dependency
//!   entry and wins - the dependency entry takes the new version and no dev
//!   entry is created. "Dependency" is the dominant category: a name never
//!   appears in both output maps.
//!
//! The engine itself never fails; it classifies already-parsed in-memory
//! mappings. Malformed manifests are rejected upstream before any folding
//! starts.

pub mod exclusion;
pub mod precedence;

use crate::manifest::MergedManifest;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::Path;

pub use exclusion::ExclusionPatterns;
pub use precedence::takes_precedence;

/// Declaration category, used only for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Dependency,
    DevDependency,
}

impl Category {
    fn label(self) -> &'static str {
        match self {
            Category::Dependency => "dependency",
            Category::DevDependency => "devDependency",
        }
    }
}

/// Merges declaration sets from N projects into one merged result.
///
/// Create one per `assemble` run, fold every project's `dependencies` map,
/// then every project's `devDependencies` map, then freeze the result with
/// [`Assembler::into_manifest`].
#[derive(Debug)]
pub struct Assembler {
    exclude: ExclusionPatterns,
    quiet: bool,
    dependencies: BTreeMap<String, String>,
    dev_dependencies: BTreeMap<String, String>,
}

impl Assembler {
    /// Create an empty assembler with the given exclusion pattern set.
    pub fn new(exclude: ExclusionPatterns) -> Self {
        Self {
            exclude,
            quiet: false,
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        }
    }

    /// Suppress per-package notifications (they never affect the result).
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Fold one project's `dependencies` map into the merged result.
    pub fn fold_dependencies(&mut self, project: &str, deps: &BTreeMap<String, String>) {
        if deps.is_empty() {
            return;
        }
        self.note(format!("\nassembling dependencies from {project}").green());

        for (name, version) in deps {
            if self.exclude.is_private(version) {
                self.note(excluded(Category::Dependency, name, version).red());
                continue;
            }

            match self.dependencies.get(name).cloned() {
                Some(existing) => {
                    if takes_precedence(&existing, version) {
                        self.dependencies.insert(name.clone(), version.clone());
                        self.note_plain(updated(Category::Dependency, name, &existing, version));
                    } else {
                        self.note(skipped(Category::Dependency, name, version, &existing).yellow());
                    }
                }
                None => {
                    self.dependencies.insert(name.clone(), version.clone());
                    self.note_plain(added(Category::Dependency, name, version));
                }
            }
        }
    }

    /// Fold one project's `devDependencies` map into the merged result.
    ///
    /// Must only be called after every project's plain dependencies have been
    /// folded, so that promotion checks run against the settled dependency
    /// set.
    pub fn fold_dev_dependencies(&mut self, project: &str, dev_deps: &BTreeMap<String, String>) {
        if dev_deps.is_empty() {
            return;
        }
        self.note(format!("\nassembling devDependencies from {project}").green());

        for (name, version) in dev_deps {
            if self.exclude.is_private(version) {
                self.note(excluded(Category::DevDependency, name, version).red());
                continue;
            }

            // A name already present as a plain dependency stays one: either
            // the dev declaration's version wins and replaces it, or the dev
            // declaration disappears entirely.
            if let Some(existing) = self.dependencies.get(name).cloned() {
                if takes_precedence(&existing, version) {
                    self.dependencies.insert(name.clone(), version.clone());
                    self.note_plain(promoted(name, &existing, version));
                } else {
                    self.note(skipped(Category::DevDependency, name, version, &existing).yellow());
                }
                continue;
            }

            match self.dev_dependencies.get(name).cloned() {
                Some(existing) => {
                    if takes_precedence(&existing, version) {
                        self.dev_dependencies.insert(name.clone(), version.clone());
                        self.note_plain(updated(Category::DevDependency, name, &existing, version));
                    } else {
                        self.note(
                            skipped(Category::DevDependency, name, version, &existing).yellow(),
                        );
                    }
                }
                None => {
                    self.dev_dependencies.insert(name.clone(), version.clone());
                    self.note_plain(added(Category::DevDependency, name, version));
                }
            }
        }
    }

    /// The merged `dependencies` map assembled so far.
    pub fn dependencies(&self) -> &BTreeMap<String, String> {
        &self.dependencies
    }

    /// The merged `devDependencies` map assembled so far.
    pub fn dev_dependencies(&self) -> &BTreeMap<String, String> {
        &self.dev_dependencies
    }

    /// Freeze the merged result into an output manifest for `root`.
    pub fn into_manifest(self, root: &Path) -> MergedManifest {
        MergedManifest::new(root, self.dependencies, self.dev_dependencies)
    }

    fn note(&self, message: colored::ColoredString) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn note_plain(&self, message: String) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

fn added(category: Category, name: &str, version: &str) -> String {
    format!("added {} \"{name}\" with version \"{version}\"", category.label())
}

fn updated(category: Category, name: &str, lower: &str, higher: &str) -> String {
    format!(
        "updated {} \"{name}\" to higher version (\"{higher}\" > \"{lower}\")",
        category.label()
    )
}

fn skipped(category: Category, name: &str, lower: &str, higher: &str) -> String {
    format!(
        "skipped {} \"{name}\" (previously assembled with equal or higher version \"{higher}\" > \"{lower}\")",
        category.label()
    )
}

fn excluded(category: Category, name: &str, version: &str) -> String {
    format!(
        "excluded {} \"{name}\" (version \"{version}\" matches exclusion patterns)",
        category.label()
    )
}

fn promoted(name: &str, lower: &str, higher: &str) -> String {
    format!(
        "promoted devDependency \"{name}\" to replace previously added dependency with higher version (\"{higher}\" > \"{lower}\")"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn deps(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(name, version)| (name.to_string(), version.to_string()))
            .collect()
    }

    fn assembler() -> Assembler {
        Assembler::new(ExclusionPatterns::default()).quiet(true)
    }

    #[test]
    fn private_versions_are_excluded_from_the_result() {
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &deps(&[("dep-a", "github.com/org/a.git")]));
        assembler.fold_dependencies(
            "project-2",
            &deps(&[("dep-b", "1.0.0"), ("dep-c", "bitbucket.com/org/c.git")]),
        );

        assert_eq!(assembler.dependencies(), &deps(&[("dep-b", "1.0.0")]));
        assert!(assembler.dev_dependencies().is_empty());
    }

    #[test]
    fn dev_declaration_promotes_with_higher_version() {
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &deps(&[("somelib", "^2.5.0")]));
        assembler.fold_dev_dependencies("project-2", &deps(&[("somelib", "^2.6.1")]));

        assert_eq!(assembler.dependencies(), &deps(&[("somelib", "^2.6.1")]));
        assert!(assembler.dev_dependencies().is_empty());
    }

    #[test]
    fn dev_declaration_with_lower_version_is_dropped() {
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &deps(&[("somelib", "^2.7.0")]));
        assembler.fold_dev_dependencies("project-2", &deps(&[("somelib", "^2.6.1")]));

        assert_eq!(assembler.dependencies(), &deps(&[("somelib", "^2.7.0")]));
        assert!(assembler.dev_dependencies().is_empty());
    }

    #[test]
    fn dev_dependencies_update_within_their_own_category() {
        let mut assembler = assembler();
        assembler.fold_dev_dependencies("project-1", &deps(&[("devdep-a", "~1.0.0")]));
        assembler.fold_dev_dependencies("project-2", &deps(&[("devdep-a", "~1.0.1")]));

        assert!(assembler.dependencies().is_empty());
        assert_eq!(assembler.dev_dependencies(), &deps(&[("devdep-a", "~1.0.1")]));
    }

    #[test]
    fn dependencies_update_on_precedence_and_skip_otherwise() {
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &deps(&[("dep-a", "1.1.0")]));
        assembler.fold_dependencies("project-2", &deps(&[("dep-a", "1.2.0")]));
        assembler.fold_dependencies("project-3", &deps(&[("dep-a", "1.0.0")]));

        assert_eq!(assembler.dependencies(), &deps(&[("dep-a", "1.2.0")]));
    }

    #[test]
    fn no_name_ever_lands_in_both_categories() {
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &deps(&[("shared", "1.0.0"), ("only", "2.0.0")]));
        assembler.fold_dev_dependencies(
            "project-2",
            &deps(&[("shared", "3.0.0"), ("dev-only", "1.0.0")]),
        );
        assembler.fold_dev_dependencies("project-3", &deps(&[("shared", "0.5.0")]));

        for name in assembler.dependencies().keys() {
            assert!(
                !assembler.dev_dependencies().contains_key(name),
                "{name} present in both categories"
            );
        }
        assert_eq!(assembler.dependencies()["shared"], "3.0.0");
        assert_eq!(assembler.dev_dependencies(), &deps(&[("dev-only", "1.0.0")]));
    }

    #[test]
    fn exclusion_is_per_pair_not_per_name() {
        // an excluded declaration does not poison the name: a later project's
        // registry version fills the slot as if the package were new
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &deps(&[("dep-a", "github.com/org/a.git")]));
        assembler.fold_dependencies("project-2", &deps(&[("dep-a", "1.0.0")]));

        assert_eq!(assembler.dependencies(), &deps(&[("dep-a", "1.0.0")]));
    }

    #[test]
    fn private_dev_versions_are_excluded_from_the_result() {
        let mut assembler = assembler();
        assembler.fold_dev_dependencies(
            "project-1",
            &deps(&[("dep-x", "gitlab.com/org/x.git"), ("dev-a", "~1.0.0")]),
        );

        assert!(assembler.dependencies().is_empty());
        assert_eq!(assembler.dev_dependencies(), &deps(&[("dev-a", "~1.0.0")]));
    }

    #[test]
    fn private_dev_declaration_never_promotes_over_a_dependency() {
        // the exclusion check runs before the promotion check, so a private
        // dev version is dropped even when it would otherwise win
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &deps(&[("somelib", "^2.5.0")]));
        assembler.fold_dev_dependencies("project-2", &deps(&[("somelib", "github.com/org/somelib.git")]));

        assert_eq!(assembler.dependencies(), &deps(&[("somelib", "^2.5.0")]));
        assert!(assembler.dev_dependencies().is_empty());
    }

    #[test]
    fn result_is_invariant_under_project_ordering() {
        let projects = [
            ("project-1", deps(&[("dep-a", "^1.0.0"), ("shared", "2.0.0")])),
            ("project-2", deps(&[("dep-a", "^1.2.0")])),
            ("project-3", deps(&[("dep-a", "^0.9.0"), ("dep-b", "3.0.0")])),
        ];
        let dev_projects = [
            ("project-1", deps(&[("devdep-a", "~1.0.1")])),
            ("project-2", deps(&[("devdep-a", "~1.0.0"), ("shared", "2.1.0")])),
        ];

        let orderings: [[usize; 3]; 3] = [[0, 1, 2], [2, 1, 0], [1, 0, 2]];
        let mut results = Vec::new();
        for ordering in orderings {
            let mut assembler = assembler();
            for index in ordering {
                let (project, declarations) = &projects[index];
                assembler.fold_dependencies(project, declarations);
            }
            for (project, declarations) in &dev_projects {
                assembler.fold_dev_dependencies(project, declarations);
            }
            results.push((
                assembler.dependencies().clone(),
                assembler.dev_dependencies().clone(),
            ));
        }

        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
        assert_eq!(results[0].0["dep-a"], "^1.2.0");
        assert_eq!(results[0].0["shared"], "2.1.0");
        assert_eq!(results[0].1, deps(&[("devdep-a", "~1.0.1")]));
    }

    #[test]
    fn empty_declaration_sets_are_a_no_op() {
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &BTreeMap::new());
        assembler.fold_dev_dependencies("project-1", &BTreeMap::new());

        assert!(assembler.dependencies().is_empty());
        assert!(assembler.dev_dependencies().is_empty());
    }

    #[test]
    fn into_manifest_freezes_the_merged_result() {
        let mut assembler = assembler();
        assembler.fold_dependencies("project-1", &deps(&[("dep-a", "1.0.0")]));
        assembler.fold_dev_dependencies("project-1", &deps(&[("devdep-a", "~2.0.0")]));

        let merged = assembler.into_manifest(Path::new("/ws/meta-repo"));
        assert_eq!(merged.name, "monolink-meta-repo");
        assert_eq!(merged.dependencies, deps(&[("dep-a", "1.0.0")]));
        assert_eq!(merged.dev_dependencies, deps(&[("devdep-a", "~2.0.0")]));
    }

    #[test]
    fn notification_texts_match_the_documented_wording() {
        assert_eq!(
            added(Category::Dependency, "dep-a", "1.0.0"),
            "added dependency \"dep-a\" with version \"1.0.0\""
        );
        assert_eq!(
            updated(Category::DevDependency, "dev-a", "1.0.0", "1.0.1"),
            "updated devDependency \"dev-a\" to higher version (\"1.0.1\" > \"1.0.0\")"
        );
        assert_eq!(
            skipped(Category::Dependency, "dep-a", "1.0.0", "1.0.1"),
            "skipped dependency \"dep-a\" (previously assembled with equal or higher version \"1.0.1\" > \"1.0.0\")"
        );
        assert_eq!(
            excluded(Category::Dependency, "dep-a", "github.com/org/a.git"),
            "excluded dependency \"dep-a\" (version \"github.com/org/a.git\" matches exclusion patterns)"
        );
        assert_eq!(
            promoted("somelib", "^2.5.0", "^2.6.1"),
            "promoted devDependency \"somelib\" to replace previously added dependency with higher version (\"^2.6.1\" > \"^2.5.0\")"
        );
    }
}
