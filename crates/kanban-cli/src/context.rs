use anyhow::Context;
use kanban_core::{AppConfig, KanbanResult};
use kanban_domain::{Action, Board, BoardStore, BoardTemplate, Snapshot};
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;

/// Outcome of replaying a script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Actions read from the script.
    pub applied: usize,
    /// Actions that produced a different collection.
    pub changed: usize,
    /// Actions that were rejected or had no visible effect.
    pub unchanged: usize,
}

#[derive(Serialize)]
pub struct RunOutput<'a> {
    pub report: ScriptReport,
    pub boards: &'a [Board],
}

pub struct CliContext {
    store: BoardStore,
}

impl CliContext {
    /// Builds the session from a snapshot file, or from the seed boards when
    /// no input is given.
    pub fn load(input: Option<&Path>, config: &AppConfig) -> KanbanResult<Self> {
        let boards = match input {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let snapshot = Snapshot::from_json(&json)?;
                tracing::info!(
                    "Loaded {} boards ({} tasks) from {}",
                    snapshot.boards.len(),
                    snapshot.task_count(),
                    path.display()
                );
                snapshot.boards
            }
            None => kanban_domain::seed::initial_boards(),
        };

        let store = BoardStore::new(boards).with_template(BoardTemplate::from_config(config));
        Ok(Self { store })
    }

    pub fn boards(&self) -> &[Board] {
        self.store.boards()
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        self.store.dispatch(action)
    }

    /// Replays JSON-lines actions. Blank lines and `#` comments are skipped.
    pub fn run_script<R: BufRead>(&mut self, reader: R) -> anyhow::Result<ScriptReport> {
        let mut report = ScriptReport::default();
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.with_context(|| format!("failed to read line {}", line_number))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let action: Action = serde_json::from_str(trimmed)
                .with_context(|| format!("invalid action on line {}", line_number))?;
            report.applied += 1;
            if self.dispatch(action) {
                report.changed += 1;
            } else {
                report.unchanged += 1;
            }
        }
        tracing::info!(
            applied = report.applied,
            changed = report.changed,
            "Script finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn seeded() -> CliContext {
        CliContext::load(None, &AppConfig::default()).unwrap()
    }

    #[test]
    fn test_load_seed() {
        let ctx = seeded();
        assert_eq!(ctx.boards().len(), 2);
        assert_eq!(ctx.boards()[0].id, "board-1");
    }

    #[test]
    fn test_run_script_counts_changes() {
        let mut ctx = seeded();
        let script = r#"
# move the competitor research along
{"action":"move_task","task_id":"task-1","over":"board-1:column-in-progress"}
{"action":"add_status","board_id":"board-1","name":"  "}

{"action":"drag_start","task_id":"task-2"}
{"action":"drag_end","over":"board-2:column-planning"}
"#;
        let report = ctx.run_script(Cursor::new(script)).unwrap();

        assert_eq!(
            report,
            ScriptReport {
                applied: 4,
                changed: 2,
                unchanged: 2,
            }
        );
        let board2 = &ctx.boards()[1];
        assert_eq!(board2.task("task-2").unwrap().status, "planning");
    }

    #[test]
    fn test_run_script_reports_bad_line() {
        let mut ctx = seeded();
        let err = ctx
            .run_script(Cursor::new("{\"action\":\"drag_cancel\"}\n{oops}\n"))
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_from_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boards.json");
        std::fs::write(
            &path,
            r#"{"boards":[{"id":"solo","name":"Solo","statuses":[{"id":"todo","name":"To Do"}]}]}"#,
        )
        .unwrap();

        let ctx = CliContext::load(Some(&path), &AppConfig::default()).unwrap();
        assert_eq!(ctx.boards().len(), 1);
        assert_eq!(ctx.boards()[0].name, "Solo");
    }

    #[test]
    fn test_config_shapes_new_boards() {
        let config = AppConfig {
            board_name_prefix: Some("Team".to_string()),
            default_statuses: Some(vec!["Open".to_string(), "Closed".to_string()]),
        };
        let mut ctx = CliContext::load(None, &config).unwrap();
        assert!(ctx.dispatch(Action::AddBoard { name: None }));

        let added = ctx.boards().last().unwrap();
        assert_eq!(added.name, "Team 3");
        let ids: Vec<_> = added.statuses.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["open", "closed"]);
    }
}
