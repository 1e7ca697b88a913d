//! The interactive editing session.
//!
//! An [`Editor`] owns the one graph of the process. Lines are read from any
//! `BufRead` and answered on any `Write`, so a whole session can be driven
//! from memory as well as from a terminal.

use crate::core::error::SphereResult;
use crate::editor::command::{Command, CommandTable};
use crate::editor::options::EditorOptions;
use crate::graph::structure::SphereGraph;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

/// Result of handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print this text.
    Text(String),
    /// Nothing to print.
    Silent,
    /// Leave the command loop.
    Exit,
}

/// Interactive editor over a single sphere graph.
#[derive(Debug, Clone)]
pub struct Editor {
    graph: SphereGraph,
    commands: CommandTable,
    options: EditorOptions,
}

impl Editor {
    /// Create an editor with the built-in commands and default options.
    pub fn new(graph: SphereGraph) -> Self {
        Self {
            graph,
            commands: CommandTable::with_builtins(),
            options: EditorOptions::default(),
        }
    }

    /// Set the options.
    pub fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    /// The graph being edited.
    pub fn graph(&self) -> &SphereGraph {
        &self.graph
    }

    /// Take the graph back out of the editor.
    pub fn into_graph(self) -> SphereGraph {
        self.graph
    }

    /// Handle one raw input line.
    ///
    /// A line that is empty after trimming ends the session like `exit`.
    pub fn handle_line(&mut self, line: &str) -> SphereResult<Response> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Response::Exit);
        }

        match self.commands.parse(line)? {
            Some(command) => self.execute(command),
            None => {
                debug!("Ignoring unknown command {:?}", line);
                Ok(Response::Silent)
            }
        }
    }

    /// Execute a parsed command against the graph.
    pub fn execute(&mut self, command: Command) -> SphereResult<Response> {
        debug!("Executing {:?}", command);
        match command {
            Command::Show => Ok(Response::Text(self.render())),
            Command::Add { a, b } => {
                let change = self.graph.add_edge(&a, &b);
                info!(
                    "Edge {}-{}: {} new sphere(s), {} new neighbour entr(ies)",
                    a, b, change.created_spheres, change.added_neighbours
                );
                Ok(Response::Silent)
            }
            Command::Write { path } => {
                self.graph.sort_by_numeric_id()?;
                self.graph.save(&path)?;
                Ok(Response::Text(format!(
                    "Wrote data to file '{}'",
                    path.display()
                )))
            }
            Command::Help => Ok(Response::Text(self.commands.help_text())),
            Command::Exit => Ok(Response::Exit),
        }
    }

    /// Human-readable listing of every sphere.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self.graph.spheres().map(|s| s.to_string()).collect();
        format!("[{}]", lines.join(",\n "))
    }

    /// Run the command loop until end-of-input, a blank line or `exit`.
    ///
    /// Command errors are written to `err` and the loop continues. Only
    /// failures of the streams themselves are returned.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut line = String::new();
        loop {
            write!(out, "{}", self.options.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match self.handle_line(&line) {
                Ok(Response::Text(text)) => writeln!(out, "{}", text)?,
                Ok(Response::Silent) => {}
                Ok(Response::Exit) => break,
                Err(error) => {
                    warn!("Command {:?} failed: {}", line.trim(), error);
                    writeln!(err, "error: {}", error)?;
                    if let Some(fix) = error.suggested_fix() {
                        writeln!(err, "   → Suggestion: {}", fix)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SphereError;
    use crate::core::types::SphereId;
    use crate::graph::serialization::SerializedGraph;

    fn id(s: &str) -> SphereId {
        SphereId::from(s)
    }

    fn run_session(editor: &mut Editor, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        editor.run(script.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_add_lines() {
        let mut editor = Editor::new(SphereGraph::new());

        assert_eq!(editor.handle_line("add 3-1\n").unwrap(), Response::Silent);
        assert_eq!(editor.handle_line("  add 1-2  ").unwrap(), Response::Silent);

        let graph = editor.graph();
        assert_eq!(graph.sphere_count(), 3);
        assert!(graph.are_adjacent(&id("3"), &id("1")));
        assert!(graph.are_adjacent(&id("1"), &id("2")));
    }

    #[test]
    fn test_blank_line_exits() {
        let mut editor = Editor::new(SphereGraph::new());
        assert_eq!(editor.handle_line("   \n").unwrap(), Response::Exit);
        assert_eq!(editor.handle_line("quit").unwrap(), Response::Exit);
    }

    #[test]
    fn test_show_renders_spheres() {
        let mut editor = Editor::new(SphereGraph::new());
        assert_eq!(editor.render(), "[]");

        editor.handle_line("add 2-1").unwrap();
        let shown = match editor.handle_line("show").unwrap() {
            Response::Text(text) => text,
            other => panic!("unexpected response {:?}", other),
        };
        assert_eq!(
            shown,
            "[{id: \"2\", space: -1, neighbours: [{id: \"1\", angle: -1}]},\n \
             {id: \"1\", space: -1, neighbours: [{id: \"2\", angle: -1}]}]"
        );
    }

    #[test]
    fn test_show_includes_preserved_keys() {
        let content = r#"
[[spheres]]
id = "2"
space = 1
label = "hall"

[[spheres.neighbours]]
id = "1"
angle = 22.5
visible = false
"#;
        let serialized = SerializedGraph::from_toml(content).unwrap();
        let mut editor = Editor::new(SphereGraph::try_from(serialized).unwrap());

        let shown = match editor.handle_line("show").unwrap() {
            Response::Text(text) => text,
            other => panic!("unexpected response {:?}", other),
        };
        assert!(shown.contains(r#"label: "hall""#), "{}", shown);
        assert!(shown.contains("visible: false"), "{}", shown);
    }

    #[test]
    fn test_write_failure_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = Editor::new(SphereGraph::new());
        editor.handle_line("add 1-2").unwrap();

        let bad = dir.path().join("missing").join("out.toml");
        let result = editor.handle_line(&format!("write {}", bad.display()));
        assert!(matches!(result, Err(SphereError::File { .. })));
        assert_eq!(editor.graph().sphere_count(), 2);
    }

    #[test]
    fn test_run_reports_and_continues() {
        let mut editor = Editor::new(SphereGraph::new());

        let (out, err) = run_session(&mut editor, "add 12\nfrobnicate\nadd 1-2\nexit\nadd 3-4\n");

        assert!(err.contains("error: Malformed 'add' command"));
        assert!(err.contains("Suggestion"));
        assert_eq!(editor.graph().sphere_count(), 2);
        assert_eq!(out.matches("> ").count(), 4);
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut editor = Editor::new(SphereGraph::new())
            .with_options(EditorOptions::new().with_prompt("spheres> "));

        let (out, err) = run_session(&mut editor, "add 1-2\nhelp");

        assert!(err.is_empty());
        assert!(out.starts_with("spheres> "));
        assert!(out.contains("add ID1-ID2"));
        assert!(out.ends_with("spheres> "));
    }
}
