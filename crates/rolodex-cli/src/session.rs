//! Menu session state machine.
//!
//! The `Session` owns the directory and turns input lines into directory
//! operations. It performs no I/O: every call returns the output to write as
//! [`SessionAction`]s, and the driver decides how to read and write.
//!
//! ## Flow
//!
//! ```text
//! AwaitingChoice ──1──► AddName ─► AddPhone1 ─► AddPhone2 ──┐
//!       │        ──2──► EditName ─► EditPhone1 ─► EditPhone2 ┤
//!       │        ──3──► DeleteName ──────────────────────────┤
//!       │        ──4──► SearchName ──────────────────────────┤
//!       │  5, 6, invalid: answered immediately               │
//!       │◄──────────────────────── menu redisplayed ◄────────┘
//!       └──7 / end of input──► Closed (terminal)
//! ```

use rolodex_core::ContactDirectory;

use crate::{
    config::SessionConfig,
    menu::MenuChoice,
    render::{render_menu, render_table, render_tally},
};

const MSG_ADDED: &str = "Contact added successfully.\n";
const MSG_UPDATED: &str = "Contact updated successfully.\n";
const MSG_DELETED: &str = "Contact deleted successfully.\n";
const MSG_NOT_FOUND: &str = "Contact not found.\n";
const MSG_INVALID_CHOICE: &str = "Invalid choice. Please try again.\n";
const MSG_EXITING: &str = "Exiting...\n";

/// Input fed into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// One line of input, without its line terminator.
    Line(String),
    /// Input is exhausted.
    EndOfInput,
}

/// Output produced by the session for the driver to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Write this text verbatim.
    Write(String),
    /// Stop feeding events; the session is closed.
    Exit,
}

/// What the session is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    AwaitingChoice,
    AddName,
    AddPhone1 { name: String },
    AddPhone2 { name: String, phone1: String },
    EditName,
    EditPhone1 { name: String },
    EditPhone2 { name: String, phone1: String },
    DeleteName,
    SearchName,
    Closed,
}

/// Interactive menu over a contact directory.
#[derive(Debug)]
pub struct Session {
    directory: ContactDirectory,
    config: SessionConfig,
    state: SessionState,
}

impl Session {
    /// Create a session over an empty directory.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_directory(ContactDirectory::new(), config)
    }

    /// Create a session over an existing directory.
    pub fn with_directory(directory: ContactDirectory, config: SessionConfig) -> Self {
        Self { directory, config, state: SessionState::AwaitingChoice }
    }

    /// The directory this session edits.
    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// Whether the session has exited. A closed session ignores all events.
    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    /// Actions to run before the first event: the menu and choice prompt.
    pub fn start(&self) -> Vec<SessionAction> {
        if self.is_closed() {
            return Vec::new();
        }
        vec![self.menu()]
    }

    /// Process an event and return resulting actions.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionAction> {
        if self.is_closed() {
            return Vec::new();
        }

        let line = match event {
            SessionEvent::Line(line) => line,
            SessionEvent::EndOfInput => {
                tracing::info!(state = ?self.state, "end of input, closing session");
                self.state = SessionState::Closed;
                return vec![SessionAction::Write("\n".to_string()), SessionAction::Exit];
            },
        };

        let mut actions = Vec::new();
        let state = std::mem::replace(&mut self.state, SessionState::AwaitingChoice);
        let next = self.step(state, line, &mut actions);
        tracing::debug!(state = ?next, "session transition");
        self.state = next;
        actions
    }

    fn step(
        &mut self,
        state: SessionState,
        line: String,
        actions: &mut Vec<SessionAction>,
    ) -> SessionState {
        match state {
            SessionState::AwaitingChoice => self.handle_choice(&line, actions),

            SessionState::AddName => {
                actions.push(write("Enter phone1: "));
                SessionState::AddPhone1 { name: line }
            },
            SessionState::AddPhone1 { name } => {
                actions.push(write("Enter phone2: "));
                SessionState::AddPhone2 { name, phone1: line }
            },
            SessionState::AddPhone2 { name, phone1 } => {
                self.directory.add(name, phone1, line);
                actions.push(write(MSG_ADDED));
                self.finish_command(actions)
            },

            SessionState::EditName => {
                actions.push(write("Enter new phone1: "));
                SessionState::EditPhone1 { name: line }
            },
            SessionState::EditPhone1 { name } => {
                actions.push(write("Enter new phone2: "));
                SessionState::EditPhone2 { name, phone1: line }
            },
            SessionState::EditPhone2 { name, phone1 } => {
                match self.directory.edit(&name, phone1, line) {
                    Ok(_) => actions.push(write(MSG_UPDATED)),
                    Err(e) => {
                        tracing::debug!("edit failed: {}", e);
                        actions.push(write(MSG_NOT_FOUND));
                    },
                }
                self.finish_command(actions)
            },

            SessionState::DeleteName => {
                match self.directory.delete(&line) {
                    Ok(_) => actions.push(write(MSG_DELETED)),
                    Err(e) => {
                        tracing::debug!("delete failed: {}", e);
                        actions.push(write(MSG_NOT_FOUND));
                    },
                }
                self.finish_command(actions)
            },

            SessionState::SearchName => {
                match self.directory.search(&line) {
                    Some(contact) => actions.push(SessionAction::Write(render_table([contact]))),
                    None => actions.push(write(MSG_NOT_FOUND)),
                }
                self.finish_command(actions)
            },

            // Filtered out by `handle`
            SessionState::Closed => SessionState::Closed,
        }
    }

    fn handle_choice(&mut self, line: &str, actions: &mut Vec<SessionAction>) -> SessionState {
        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                tracing::warn!("{}", e);
                actions.push(write(MSG_INVALID_CHOICE));
                return self.finish_command(actions);
            },
        };

        tracing::debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Add => {
                actions.push(write("Enter name: "));
                SessionState::AddName
            },
            MenuChoice::Edit => {
                actions.push(write("Enter name of the contact to edit: "));
                SessionState::EditName
            },
            MenuChoice::Delete => {
                actions.push(write("Enter name of the contact to delete: "));
                SessionState::DeleteName
            },
            MenuChoice::Search => {
                actions.push(write("Enter name to search: "));
                SessionState::SearchName
            },
            MenuChoice::Tally => {
                let tally = self.directory.count_per_initial_letter();
                actions.push(SessionAction::Write(render_tally(&tally)));
                self.finish_command(actions)
            },
            MenuChoice::List => {
                actions.push(SessionAction::Write(render_table(self.directory.list_ordered())));
                self.finish_command(actions)
            },
            MenuChoice::Exit => {
                tracing::info!(contacts = self.directory.len(), "exit selected");
                actions.push(write(MSG_EXITING));
                actions.push(SessionAction::Exit);
                SessionState::Closed
            },
        }
    }

    /// Redisplay the menu and wait for the next choice.
    fn finish_command(&self, actions: &mut Vec<SessionAction>) -> SessionState {
        actions.push(self.menu());
        SessionState::AwaitingChoice
    }

    fn menu(&self) -> SessionAction {
        SessionAction::Write(render_menu(self.config.banner))
    }
}

fn write(text: &str) -> SessionAction {
    SessionAction::Write(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BannerStyle;

    fn compact() -> Session {
        Session::new(SessionConfig { banner: BannerStyle::Compact })
    }

    fn feed(session: &mut Session, lines: &[&str]) -> Vec<SessionAction> {
        lines
            .iter()
            .flat_map(|line| session.handle(SessionEvent::Line((*line).to_string())))
            .collect()
    }

    #[test]
    fn start_shows_menu() {
        let session = compact();
        let actions = session.start();
        assert_eq!(actions, vec![SessionAction::Write(render_menu(BannerStyle::Compact))]);
    }

    #[test]
    fn add_walks_through_prompts() {
        let mut session = compact();

        assert_eq!(feed(&mut session, &["1"]), vec![write("Enter name: ")]);
        assert_eq!(feed(&mut session, &["Bob"]), vec![write("Enter phone1: ")]);
        assert_eq!(feed(&mut session, &["1"]), vec![write("Enter phone2: ")]);
        assert!(session.directory().is_empty());

        let actions = feed(&mut session, &["2"]);
        assert_eq!(actions[0], write(MSG_ADDED));
        assert_eq!(session.state, SessionState::AwaitingChoice);

        let bob = session.directory().search("Bob").unwrap();
        assert_eq!((bob.phone1.as_str(), bob.phone2.as_str()), ("1", "2"));
    }

    #[test]
    fn field_lines_are_taken_verbatim() {
        let mut session = compact();
        feed(&mut session, &["1", "  Ann Lee ", "", " 2 "]);

        let contact = session.directory().search("  Ann Lee ").unwrap();
        assert_eq!(contact.phone1, "");
        assert_eq!(contact.phone2, " 2 ");
    }

    #[test]
    fn invalid_choice_redisplays_menu() {
        let mut session = compact();
        let actions = feed(&mut session, &["9"]);

        assert_eq!(actions, vec![write(MSG_INVALID_CHOICE), session.menu()]);
        assert_eq!(session.state, SessionState::AwaitingChoice);
    }

    #[test]
    fn choice_digits_inside_a_field_are_not_commands() {
        let mut session = compact();
        feed(&mut session, &["1", "7", "7", "7"]);

        assert!(!session.is_closed());
        assert!(session.directory().search("7").is_some());
    }

    #[test]
    fn exit_closes_session() {
        let mut session = compact();
        let actions = feed(&mut session, &["7"]);

        assert_eq!(actions, vec![write(MSG_EXITING), SessionAction::Exit]);
        assert!(session.is_closed());
        assert!(session.start().is_empty());
        assert!(feed(&mut session, &["1"]).is_empty());
        assert!(session.handle(SessionEvent::EndOfInput).is_empty());
    }

    #[test]
    fn end_of_input_mid_command_discards_partial_add() {
        let mut session = compact();
        feed(&mut session, &["1", "Bob", "1"]);

        let actions = session.handle(SessionEvent::EndOfInput);
        assert_eq!(actions.last(), Some(&SessionAction::Exit));
        assert!(session.is_closed());
        assert!(session.directory().is_empty());
    }
}
