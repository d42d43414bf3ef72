//! Line-driven interactive form.
//!
//! Mirrors a small desktop form: a title field, a multi-line text area, and
//! Generate / Export buttons. Each input line is one command.

use std::io::{BufRead, Write};
use std::str::FromStr;

use mindmap_render::GeneratedMap;
use mindmap_types::{ExportFormat, MindMapError};

use crate::session::Session;

const HELP: &str = "\
Commands:
  title <text>          set the central topic (blank uses the default)
  text <line>           append a line to the body text
  clear                 clear the body text
  generate              build the mind map from the current title and text
  show                  show the current title, text and last map
  export [svg|json]     write the last map to the output directory
  help                  show this help
  quit                  leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Title(String),
    Text(String),
    Clear,
    Generate,
    Show,
    Export(Option<ExportFormat>),
    Help,
    Quit,
    Empty,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "title" => Ok(Self::Title(rest.trim().to_string())),
            // Keep the line as typed; leading spaces can matter in prose.
            "text" => Ok(Self::Text(rest.to_string())),
            "clear" => Ok(Self::Clear),
            "generate" | "gen" => Ok(Self::Generate),
            "show" => Ok(Self::Show),
            "export" => match rest.trim() {
                "" => Ok(Self::Export(None)),
                format => format.parse().map(|f| Self::Export(Some(f))),
            },
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command: {other} (try 'help')")),
        }
    }
}

/// Interactive session state: the form fields plus the generation session.
pub struct Shell {
    session: Session,
    title: String,
    text: String,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            title: String::new(),
            text: String::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Read commands until `quit` or end of input.
    ///
    /// User errors are reported on `output` and the loop keeps going; only a
    /// failure to read input or write output ends it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> std::io::Result<()> {
        writeln!(output, "Mind Map Generator. Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.execute(command, output)?,
                Err(message) => writeln!(output, "{message}")?,
            }
        }
        Ok(())
    }

    /// Apply one command, writing any feedback to `output`.
    pub fn execute<W: Write>(&mut self, command: ShellCommand, output: &mut W) -> std::io::Result<()> {
        match command {
            ShellCommand::Title(title) => self.title = title,
            ShellCommand::Text(line) => {
                self.text.push_str(&line);
                self.text.push('\n');
            }
            ShellCommand::Clear => self.text.clear(),
            ShellCommand::Generate => match self.session.generate(&self.title, &self.text) {
                Ok(map) => write_map(output, map)?,
                Err(e) => report(output, &e)?,
            },
            ShellCommand::Show => self.show(output)?,
            ShellCommand::Export(format) => match self.session.export(format) {
                Ok(path) => writeln!(output, "Mind map saved to {}", path.display())?,
                Err(e) => report(output, &e)?,
            },
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Quit | ShellCommand::Empty => {}
        }
        Ok(())
    }

    fn show<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        let title = if self.title.is_empty() {
            "(default)"
        } else {
            self.title.as_str()
        };
        writeln!(output, "Title: {title}")?;
        writeln!(output, "Text ({} lines):", self.text.lines().count())?;
        for line in self.text.lines() {
            writeln!(output, "  | {line}")?;
        }
        match self.session.current() {
            Some(map) => write_map(output, map),
            None => writeln!(output, "No mind map generated yet."),
        }
    }
}

/// Print a user-facing error as `<heading>: <message>`.
pub fn report<W: Write>(output: &mut W, error: &MindMapError) -> std::io::Result<()> {
    writeln!(output, "{}: {}", error.heading(), error)
}

/// Print a generated map's keywords and node positions.
pub fn write_map<W: Write>(output: &mut W, map: &GeneratedMap) -> std::io::Result<()> {
    writeln!(output, "Mind Map: {}", map.title)?;
    writeln!(output, "Keywords:")?;
    for (rank, keyword) in map.keywords.iter().enumerate() {
        writeln!(output, "  {:>2}. {} ({})", rank + 1, keyword.keyword, keyword.count)?;
    }
    writeln!(output, "Layout:")?;
    for node in map.graph.nodes() {
        if let Some(p) = map.layout.get(node) {
            let role = if map.graph.is_hub(node) { "hub " } else { "leaf" };
            writeln!(output, "  {role} {node:<20} ({:>7.3}, {:>7.3})", p.x, p.y)?;
        }
    }
    Ok(())
}
