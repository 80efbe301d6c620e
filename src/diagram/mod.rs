//! Diagram rendering for built state machines.
//!
//! Renders the declared transition graph of a machine as Mermaid or
//! PlantUML text. Sources appear in registration order and destinations
//! are sorted by name, so the output is stable across runs.
//!
//! # Example
//!
//! ```rust
//! use switchyard::diagram::{render, DiagramFormat};
//! use switchyard::{StateAction, StateMachineBuilder};
//!
//! struct Stay(&'static str);
//!
//! impl StateAction<&'static str, (), ()> for Stay {
//!     fn on_enter(&mut self, _ctx: &mut ()) {}
//!     fn on_exit(&mut self, _ctx: &mut ()) {}
//!     fn execute(&mut self, _ctx: &mut (), _event: ()) -> &'static str {
//!         self.0
//!     }
//! }
//!
//! let machine = StateMachineBuilder::<&'static str>::new()
//!     .name("door")
//!     .default_state("closed")
//!     .register_state("closed", Stay("closed"), ["open"])
//!     .unwrap()
//!     .register_state("open", Stay("open"), ["closed"])
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let format: DiagramFormat = "plantuml".parse().unwrap();
//! assert_eq!(
//!     render(&machine, format),
//!     "@startuml\n[*] --> closed\nclosed --> open\nopen --> closed\n@enduml\n"
//! );
//! assert_eq!(format.file_name(machine.name()), "door.uml");
//! ```

use crate::core::State;
use crate::engine::StateMachine;
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors from diagram configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("Unknown diagram format '{0}', expected 'mermaid' or 'plantuml'")]
    UnknownFormat(String),
}

/// Supported diagram notations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiagramFormat {
    #[default]
    Mermaid,
    PlantUml,
}

impl DiagramFormat {
    /// File extension used for diagrams in this notation.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
            Self::PlantUml => "uml",
        }
    }

    /// File name for the diagram of a machine called `machine_name`.
    pub fn file_name(&self, machine_name: &str) -> String {
        format!("{}.{}", machine_name, self.extension())
    }
}

impl FromStr for DiagramFormat {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mermaid" => Ok(Self::Mermaid),
            "plantuml" => Ok(Self::PlantUml),
            _ => Err(DiagramError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DiagramFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mermaid => f.write_str("mermaid"),
            Self::PlantUml => f.write_str("plantuml"),
        }
    }
}

/// Render the declared transitions of `machine`.
///
/// The default state is marked as the initial pseudo-state (`[*]`).
pub fn render<S: State, C, E>(machine: &StateMachine<S, C, E>, format: DiagramFormat) -> String {
    let (header, footer, indent) = match format {
        DiagramFormat::Mermaid => ("```mermaid\nstateDiagram-v2\n", "```\n", "    "),
        DiagramFormat::PlantUml => ("@startuml\n", "@enduml\n", ""),
    };

    let mut out = String::from(header);
    // writing into a String cannot fail
    let _ = writeln!(out, "{indent}[*] --> {}", machine.default_state().name());
    for (source, transitions) in machine.states() {
        let mut targets: Vec<_> = transitions.iter().map(|t| t.name()).collect();
        targets.sort();
        for target in targets {
            let _ = writeln!(out, "{indent}{} --> {}", source.name(), target);
        }
    }
    out.push_str(footer);
    out
}
