//! Text rendering for menus, contact tables and letter tallies.
//!
//! Every function returns a `String` ending in a newline; callers decide where
//! it is written.

use rolodex_core::{Contact, LetterTally};

use crate::{config::BannerStyle, menu::MenuChoice};

/// Width of the name column.
pub const NAME_WIDTH: usize = 30;

/// Width of each phone column.
pub const PHONE_WIDTH: usize = 28;

/// Full width of a table row: three `"| "` cell prefixes, the cell widths and
/// the closing pipe.
pub const TABLE_WIDTH: usize = NAME_WIDTH + 2 * PHONE_WIDTH + 3 * 2 + 1;

/// Prompt written after every menu.
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// Render contacts as a framed three-column table.
///
/// Cells are left-aligned and padded; values wider than their column are
/// written in full.
pub fn render_table<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    let rule = format!("{}\n", "_".repeat(TABLE_WIDTH));
    let mut out = String::new();

    out.push_str(&rule);
    out.push_str(&format!(
        "|{:^name$}|{:^phone$}|{:^phone$}|\n",
        "Name",
        "Phone1",
        "Phone2",
        name = NAME_WIDTH + 1,
        phone = PHONE_WIDTH + 1,
    ));
    out.push_str(&rule);

    for contact in contacts {
        out.push_str(&format_row(contact));
    }

    out.push_str(&rule);
    out
}

fn format_row(contact: &Contact) -> String {
    format!(
        "| {:<name$}| {:<phone$}| {:<phone$}|\n",
        contact.name,
        contact.phone1,
        contact.phone2,
        name = NAME_WIDTH,
        phone = PHONE_WIDTH,
    )
}

/// Render one `"X: n contacts"` line per letter, `A` to `Z`.
pub fn render_tally(tally: &LetterTally) -> String {
    tally.iter().map(|(letter, count)| format!("{letter}: {count} contacts\n")).collect()
}

/// Render the main menu followed by the choice prompt.
pub fn render_menu(style: BannerStyle) -> String {
    let mut out = String::new();

    match style {
        BannerStyle::Boxed => {
            out.push_str(" ___________________________\n");
            out.push_str("/           .__             \\\n");
            out.push_str("| _________________________ |\n");
            out.push_str("||       Main Menu         ||\n");
            out.push_str("|| ------------------------||\n");
            for choice in MenuChoice::ALL {
                out.push_str(&format!("|| {}. {:<21}||\n", choice.number(), choice.label()));
            }
            out.push_str("| --------------------------|\n");
            out.push_str("|___________________________|\n");
            out.push_str("\\___________________________/\n\n");
        },
        BannerStyle::Compact => {
            let options: Vec<_> = MenuChoice::ALL
                .into_iter()
                .map(|choice| format!("{}) {}", choice.number(), choice.short_label()))
                .collect();
            out.push_str(&format!("Menu: {}\n", options.join(" ")));
        },
    }

    out.push_str(CHOICE_PROMPT);
    out
}

#[cfg(test)]
mod tests {
    use rolodex_core::ContactDirectory;

    use super::*;

    #[test]
    fn table_width_matches_row_layout() {
        assert_eq!(TABLE_WIDTH, 93);
    }

    #[test]
    fn table_lists_contacts_in_directory_order() {
        let mut directory = ContactDirectory::new();
        directory.add("Zed", "", "0700 900 123");
        directory.add("Amy", "555-0100", "555-0101");

        insta::assert_snapshot!(render_table(directory.list_ordered()), @r"
        _____________________________________________________________________________________________
        |             Name              |           Phone1            |           Phone2            |
        _____________________________________________________________________________________________
        | Amy                           | 555-0100                    | 555-0101                    |
        | Zed                           |                             | 0700 900 123                |
        _____________________________________________________________________________________________
        ");
    }

    #[test]
    fn empty_table_has_header_only() {
        let table = render_table(std::iter::empty::<&Contact>());
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn long_values_are_not_truncated() {
        let long = "x".repeat(40);
        let contact = Contact::new(long.clone(), "1", "2");
        let table = render_table([&contact]);

        assert!(table.contains(&format!("| {long}| 1")));
    }

    #[test]
    fn tally_lists_every_letter() {
        let mut tally = LetterTally::new();
        tally.record("alice");
        tally.record("Bob");
        tally.record("bob2");

        let rendered = render_tally(&tally);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "A: 1 contacts");
        assert_eq!(lines[1], "B: 2 contacts");
        assert_eq!(lines[2], "C: 0 contacts");
        assert_eq!(lines[25], "Z: 0 contacts");
    }

    #[test]
    fn boxed_menu_lists_all_options() {
        let menu = render_menu(BannerStyle::Boxed);

        assert!(menu.contains("|| 1. Add Contact          ||\n"));
        assert!(menu.contains("|| 5. Number of Contacts   ||\n"));
        assert!(menu.contains("|| 7. Exit                 ||\n"));
        assert!(menu.ends_with(CHOICE_PROMPT));
    }

    #[test]
    fn compact_menu_is_one_line() {
        assert_eq!(
            render_menu(BannerStyle::Compact),
            "Menu: 1) Add 2) Edit 3) Delete 4) Search 5) Tally 6) List 7) Exit\nEnter your choice: "
        );
    }

    #[test]
    fn boxed_menu_frame_is_closed() {
        let menu = render_menu(BannerStyle::Boxed);
        let lines: Vec<_> = menu.lines().collect();

        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], " ___________________________");
        assert_eq!(lines[12], "| --------------------------|");
        assert_eq!(lines[14], "\\___________________________/");
        assert_eq!(lines[15], "");
        assert_eq!(lines[16], CHOICE_PROMPT);
    }

    #[test]
    fn row_pads_each_cell() {
        let row = format_row(&Contact::new("Amy", "1", ""));
        assert_eq!(row.len(), TABLE_WIDTH + 1);
        assert!(row.starts_with("| Amy "));
        assert!(row.ends_with("|\n"));
    }
}
