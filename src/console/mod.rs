//! Interactive text driver for a [`StateMachine`].
//!
//! A session prints the machine's diagram, then repeatedly shows the current
//! state with a numbered menu of outgoing transitions and reads one command
//! per line. It works over any `BufRead`/`Write` pair, so it can be driven
//! from stdin/stdout or from a test buffer.

mod command;

pub use command::{Command, DiagramKind};

use crate::core::State;
use crate::export::{to_mermaid_with, to_plantuml_with, to_transition_table, DiagramStyle};
use crate::runtime::StateMachine;
use std::io::{self, BufRead, Write};

const MERMAID_URL: &str = "https://mermaid.live/";
const PLANTUML_URL: &str = "https://www.plantuml.com/plantuml/uml";
const RULE: &str = "----------------------------------------";

const HELP: &str = "\
+-----------------------------------------------------+
|  Help menu                                          |
|                 h - Help menu                       |
|                 q - Quit                            |
|       show states - All states with state machine   |
|      jump <state> - Jump to a known state by name   |
|                     e.g. jump Locked                |
|                                                     |
|   diagram <xxxxx> - mermaid, plantuml               |
|                                                     |
| <transition name> or                                |
|     [line number] - type a transition name to       |
|                     advance. Optionally type the    |
|                     line number to transition.      |
|                                                     |
|  transition table - Show a transition table         |
+-----------------------------------------------------+";

/// Console session over a borrowed machine.
pub struct ConsoleSession<'m, S: State> {
    machine: &'m mut StateMachine<S>,
    label: Option<String>,
    style: DiagramStyle,
}

impl<'m, S: State> ConsoleSession<'m, S> {
    pub fn new(machine: &'m mut StateMachine<S>) -> Self {
        Self {
            machine,
            label: None,
            style: DiagramStyle::default(),
        }
    }

    /// Name shown in the banner instead of the machine's own name.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: DiagramStyle) -> Self {
        self.style = style;
        self
    }

    /// Run until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> io::Result<()> {
        self.banner(&mut writer)?;

        let mut line = String::new();
        loop {
            self.prompt(&mut writer)?;
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                tracing::debug!(machine = %self.machine.name(), "console input closed");
                return Ok(());
            }
            writeln!(writer)?;

            match Command::parse(&line) {
                Command::Quit => {
                    writeln!(writer, "Bye!")?;
                    return Ok(());
                }
                Command::Empty => {}
                Command::Help => writeln!(writer, "{HELP}")?,
                Command::ShowStates => self.show_states(&mut writer)?,
                Command::TransitionTable => {
                    writeln!(writer, "{}", to_transition_table(self.machine))?
                }
                Command::Diagram(kind) => self.diagram(&mut writer, kind)?,
                Command::Jump(target) => self.jump(&mut writer, target.as_deref())?,
                Command::Select(index) => {
                    let name = self
                        .machine
                        .outgoing_transitions()
                        .get(index)
                        .map(|t| t.name.clone())
                        .unwrap_or_else(|| index.to_string());
                    self.take(&mut writer, &name)?;
                }
                Command::Transition(name) => self.take(&mut writer, &name)?,
            }
        }
    }

    fn banner<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let label = self.label.as_deref().unwrap_or(self.machine.name());
        writeln!(writer, "Here is a state pattern of a {label} depicted here: ")?;
        writeln!(writer)?;
        writeln!(writer, "{}", to_plantuml_with(self.machine, &self.style))?;
        writeln!(writer, " NOTE: If you are in stuck state type: jump <my_state>. e.g. jump Locked")?;
        writeln!(writer, "       Also to see all states type: show states")?;
        writeln!(writer, "Press [h] for help.")?;
        writeln!(writer, "Press [q] to quit.")?;
        writeln!(writer, "   Your initial state is: {}", self.machine.current_state())
    }

    fn prompt<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "Your current state is: {}", self.machine.current_state())?;
        writeln!(
            writer,
            "Where to go next? (Type the transition name or line number to move to the next state)"
        )?;
        for (i, transition) in self.machine.outgoing_transitions().iter().enumerate() {
            writeln!(writer, "{}) {} ---> ({})", i, transition.name, transition.to)?;
        }
        writeln!(writer)?;
        write!(writer, "Enter command or transition: ")?;
        writer.flush()
    }

    fn show_states<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let names: Vec<&str> = self.machine.pattern().states().iter().map(|s| s.name()).collect();
        writeln!(writer, "Showing available states for {}", self.machine.name())?;
        writeln!(writer, " States: [{}]", names.join(", "))
    }

    fn diagram<W: Write>(&self, writer: &mut W, kind: Option<DiagramKind>) -> io::Result<()> {
        let (label, url, text) = match kind {
            Some(DiagramKind::Mermaid) => (
                "mermaid",
                MERMAID_URL,
                to_mermaid_with(self.machine.pattern(), &self.style),
            ),
            Some(DiagramKind::PlantUml) => (
                "plantuml",
                PLANTUML_URL,
                to_plantuml_with(self.machine, &self.style),
            ),
            None => return writeln!(writer, "Invalid diagram, please try again."),
        };
        writeln!(writer, "{RULE}")?;
        writeln!(writer, "Diagram {label} {url}")?;
        writeln!(writer, "{RULE}")?;
        writeln!(writer)?;
        writeln!(writer, "{text}")?;
        writeln!(writer, "{RULE}")
    }

    fn jump<W: Write>(&mut self, writer: &mut W, target: Option<&str>) -> io::Result<()> {
        let state = match target {
            Some(name) => {
                writeln!(writer, "Jumping to a new state {name}")?;
                self.machine.lookup_state_by_name(name).cloned()
            }
            None => None,
        };
        match state {
            Some(state) => {
                if let Err(err) = self.machine.reset_to(state) {
                    tracing::warn!(error = %err, "jump rejected");
                    writeln!(writer, "Invalid State to begin, please try again.")?;
                }
            }
            None => writeln!(writer, "Invalid State to begin, please try again.")?,
        }
        writeln!(writer, "Your initial state is: {}", self.machine.current_state())
    }

    fn take<W: Write>(&mut self, writer: &mut W, name: &str) -> io::Result<()> {
        let input: String = name.chars().take(1).collect();
        let mut missed = false;
        self.machine.advance_or_else(name, input.as_str(), |_, _| missed = true);
        if missed {
            writeln!(writer, "Invalid choices, try again.")?;
        }
        writeln!(writer, "transition: {name} - input = {input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StatePattern;
    use crate::state_enum;
    use std::io::Cursor;

    state_enum! {
        enum Turnstile {
            Locked,
            Unlocked,
            Broken,
        }
    }

    fn turnstile() -> StateMachine<Turnstile> {
        let mut pattern: StatePattern<Turnstile> = StatePattern::new();
        pattern
            .initial(Turnstile::Locked)
            .unwrap()
            .t("push")
            .unwrap()
            .t("coin")
            .unwrap()
            .s(Turnstile::Unlocked)
            .unwrap()
            .t("push")
            .unwrap()
            .s(Turnstile::Locked)
            .unwrap()
            .t_to("kick", Turnstile::Broken)
            .unwrap();
        StateMachine::named("Turnstile", pattern).unwrap()
    }

    fn run(machine: &mut StateMachine<Turnstile>, input: &str) -> String {
        let mut out = Vec::new();
        ConsoleSession::new(machine)
            .run(Cursor::new(input.to_string()), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn banner_and_menu() {
        let mut machine = turnstile();
        let out = run(&mut machine, "q\n");

        assert!(out.starts_with("Here is a state pattern of a Turnstile depicted here: "));
        assert!(out.contains("@startuml\n"));
        assert!(out.contains("   Your initial state is: Locked\n"));
        assert!(out.contains("0) push ---> (Locked)\n"));
        assert!(out.contains("1) coin ---> (Unlocked)\n"));
        assert!(out.contains("2) kick ---> (Broken)\n"));
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn label_replaces_machine_name_in_banner() {
        let mut machine = turnstile();
        let mut out = Vec::new();
        ConsoleSession::new(&mut machine)
            .label("subway gate")
            .run(Cursor::new("q\n"), &mut out)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Here is a state pattern of a subway gate depicted here: "));
    }

    #[test]
    fn names_and_numbers_advance_the_machine() {
        let mut machine = turnstile();
        let out = run(&mut machine, "coin\n0\n");

        assert!(out.contains("transition: coin - input = c\n"));
        assert!(out.contains("transition: push - input = p\n"));
        assert_eq!(machine.current_state().name(), "Locked");
        assert_eq!(machine.previous_state().name(), "Unlocked");
    }

    #[test]
    fn unknown_transition_leaves_machine_in_place() {
        let mut machine = turnstile();
        let out = run(&mut machine, "fly\n7\n");

        assert!(out.contains("Invalid choices, try again.\ntransition: fly - input = f\n"));
        assert!(out.contains("Invalid choices, try again.\ntransition: 7 - input = 7\n"));
        assert_eq!(machine.current_state().name(), "Locked");
    }

    #[test]
    fn jump_recovers_from_a_dead_end() {
        let mut machine = turnstile();
        let out = run(&mut machine, "kick\njump Unlocked\nq\n");

        assert!(out.contains("Your current state is: Broken\n"));
        assert!(out.contains("Jumping to a new state Unlocked\n"));
        assert!(out.contains("Your initial state is: Unlocked\n"));
        assert_eq!(machine.current_state().name(), "Unlocked");
        assert_eq!(machine.pattern().initial_transition().unwrap().to.name(), "Unlocked");
    }

    #[test]
    fn jump_to_unknown_state_is_reported() {
        let mut machine = turnstile();
        let out = run(&mut machine, "jump Nowhere\njump\n");

        assert_eq!(out.matches("Invalid State to begin, please try again.").count(), 2);
        assert_eq!(machine.current_state().name(), "Locked");
    }

    #[test]
    fn informational_commands() {
        let mut machine = turnstile();
        let out = run(&mut machine, "h\nshow states\ntransition table\ndiagram mermaid\ndiagram dot\n");

        assert!(out.contains("|  Help menu"));
        assert!(out.contains(" States: [Initial, Locked, Unlocked, Broken]\n"));
        assert!(out.contains("kick"));
        assert!(out.contains("Diagram mermaid https://mermaid.live/\n"));
        assert!(out.contains("stateDiagram-v2\n"));
        assert!(out.contains("Invalid diagram, please try again.\n"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut machine = turnstile();
        let out = run(&mut machine, "");
        assert!(out.ends_with("Enter command or transition: "));
    }
}
