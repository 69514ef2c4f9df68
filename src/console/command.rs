//! Parsing of console input lines.

/// Diagram formats the console can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Mermaid,
    PlantUml,
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    ShowStates,
    TransitionTable,
    /// `diagram <kind>`; `None` when the kind is missing or unknown
    Diagram(Option<DiagramKind>),
    /// `jump <state>`; `None` when no state name follows
    Jump(Option<String>),
    /// A menu line number
    Select(usize),
    /// Anything else is taken as a transition name
    Transition(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let keyword = words.next();
        let argument = words.next();

        if line.is_empty() {
            Self::Empty
        } else if line.eq_ignore_ascii_case("q") {
            Self::Quit
        } else if line == "h" {
            Self::Help
        } else if line.starts_with("show states") {
            Self::ShowStates
        } else if line == "transition table" {
            Self::TransitionTable
        } else if keyword == Some("diagram") {
            Self::Diagram(argument.and_then(DiagramKind::parse))
        } else if keyword == Some("jump") {
            Self::Jump(argument.map(str::to_string))
        } else if line.bytes().all(|b| b.is_ascii_digit()) {
            // Numbers too large for a menu index are still valid transition names.
            line.parse()
                .map(Self::Select)
                .unwrap_or_else(|_| Self::Transition(line.to_string()))
        } else {
            Self::Transition(line.to_string())
        }
    }
}

impl DiagramKind {
    fn parse(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("mermaid") {
            Some(Self::Mermaid)
        } else if word.eq_ignore_ascii_case("plantuml") {
            Some(Self::PlantUml)
        } else {
            None
        }
    }
}
