//! Task Graph Filtering
//!
//! Strips test and lint work from the aggregate `build` task set and
//! disables matching tasks globally so direct invocation becomes a no-op.
//! Matching is case-insensitive substring matching by design: blunt, with
//! no structural awareness of the graph.

use tracing::debug;

/// Name fragments whose tasks are suppressed. `androidtest` is subsumed by
/// `test` but kept to mirror the original filter verbatim.
pub const SUPPRESSED_PATTERNS: &[&str] = &["test", "androidtest", "lint"];

/// Whether a task name matches the suppression filter
pub fn is_suppressed(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SUPPRESSED_PATTERNS.iter().any(|p| lower.contains(p))
}

/// A task in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task name (e.g. `assembleRelease`, `unitTestDebug`)
    pub name: String,
    /// Whether the task runs when invoked
    pub enabled: bool,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
        }
    }
}

/// A flat view of the project's task graph
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: Vec<Task>,
}

impl TaskGraph {
    /// Build a graph from task names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tasks: names.into_iter().map(Task::new).collect(),
        }
    }

    /// All tasks
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by name
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Remove suppressed tasks from a scheduled set (the tasks the
    /// aggregate `build` task would run), returning the filtered set.
    pub fn filter_scheduled(&self, scheduled: &[String]) -> Vec<String> {
        scheduled
            .iter()
            .filter(|name| {
                let keep = !is_suppressed(name);
                if !keep {
                    debug!("Dropping '{}' from the build graph", name);
                }
                keep
            })
            .cloned()
            .collect()
    }

    /// Disable every matching task in the graph so direct invocation is a
    /// no-op. Returns the names that were disabled.
    pub fn disable_suppressed(&mut self) -> Vec<String> {
        let mut disabled = Vec::new();
        for task in &mut self.tasks {
            if task.enabled && is_suppressed(&task.name) {
                task.enabled = false;
                disabled.push(task.name.clone());
            }
        }
        debug!("Disabled {} suppressed tasks", disabled.len());
        disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_tasks_match() {
        assert!(is_suppressed("unitTestDebug"));
        assert!(is_suppressed("connectedAndroidTest"));
        assert!(is_suppressed("lintVitalRelease"));
        assert!(is_suppressed("testReleaseUnitTest"));
    }

    #[test]
    fn test_build_tasks_do_not_match() {
        assert!(!is_suppressed("assembleRelease"));
        assert!(!is_suppressed("bundleDebug"));
        assert!(!is_suppressed("compileReleaseKotlin"));
    }

    #[test]
    fn test_substring_hazard_is_intentional() {
        // Name-substring matching has no structural awareness; a task that
        // merely contains "test" is caught too.
        assert!(is_suppressed("contestWinner"));
    }

    #[test]
    fn test_filter_scheduled_set() {
        let graph = TaskGraph::default();
        let scheduled: Vec<String> = [
            "compileDebugKotlin",
            "unitTestDebug",
            "lintDebug",
            "assembleDebug",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let filtered = graph.filter_scheduled(&scheduled);
        assert_eq!(filtered, vec!["compileDebugKotlin", "assembleDebug"]);
    }

    #[test]
    fn test_disable_suppressed_globally() {
        let mut graph = TaskGraph::from_names([
            "assembleRelease",
            "unitTestDebug",
            "lintVitalRelease",
        ]);

        let disabled = graph.disable_suppressed();
        assert_eq!(disabled, vec!["unitTestDebug", "lintVitalRelease"]);

        assert!(graph.task("assembleRelease").unwrap().enabled);
        assert!(!graph.task("unitTestDebug").unwrap().enabled);

        // Second pass is a no-op
        assert!(graph.disable_suppressed().is_empty());
    }
}
