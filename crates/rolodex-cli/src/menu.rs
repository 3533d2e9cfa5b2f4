//! Main menu options.

use std::str::FromStr;

use crate::error::MenuError;

/// One selectable main menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Add a contact.
    Add,
    /// 2. Replace a contact's phone numbers.
    Edit,
    /// 3. Delete a contact.
    Delete,
    /// 4. Look up a contact by name.
    Search,
    /// 5. Count contacts per initial letter.
    Tally,
    /// 6. Print every contact in alphabetical order.
    List,
    /// 7. Leave the program.
    Exit,
}

impl MenuChoice {
    /// Every option, in menu order.
    pub const ALL: [Self; 7] =
        [Self::Add, Self::Edit, Self::Delete, Self::Search, Self::Tally, Self::List, Self::Exit];

    /// Number the user types to select this option.
    pub fn number(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Edit => 2,
            Self::Delete => 3,
            Self::Search => 4,
            Self::Tally => 5,
            Self::List => 6,
            Self::Exit => 7,
        }
    }

    /// Menu text for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Contact",
            Self::Edit => "Edit Contact",
            Self::Delete => "Delete Contact",
            Self::Search => "Search Contact",
            Self::Tally => "Number of Contacts",
            Self::List => "Print All Contacts",
            Self::Exit => "Exit",
        }
    }

    /// Short name used by the compact banner.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Search => "Search",
            Self::Tally => "Tally",
            Self::List => "List",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    /// Parse a selection line. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s.trim().parse().map_err(|_| MenuError::InvalidChoice(s.to_owned()))?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| MenuError::InvalidChoice(s.to_owned()))
    }
}
