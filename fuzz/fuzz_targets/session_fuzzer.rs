//! Fuzz target for the menu [`Session`] state machine
//!
//! # Strategy
//!
//! - Event sequences: Arbitrary input lines, biased towards menu digits so
//!   commands actually start, interleaved with end of input
//! - Field probing: Menu digits typed where a name or phone is expected
//!
//! # Invariants
//!
//! - `Exit` is only ever the last action of a batch
//! - No actions once the session is closed (terminal invariant)
//! - End of input always closes the session
//! - Contact count changes by at most one per event
//! - NEVER panic on any input line

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rolodex_cli::{BannerStyle, Session, SessionAction, SessionConfig, SessionEvent};

#[derive(Debug, Clone, Arbitrary)]
enum FuzzEvent {
    Choice(u8),
    Text(String),
    EndOfInput,
}

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    compact: bool,
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: FuzzInput| {
    let banner = if input.compact { BannerStyle::Compact } else { BannerStyle::Boxed };
    let mut session = Session::new(SessionConfig { banner });
    let _ = session.start();

    for event in input.events {
        let was_closed = session.is_closed();
        let before = session.directory().len();

        let event = match event {
            FuzzEvent::Choice(n) => SessionEvent::Line((n % 9).to_string()),
            FuzzEvent::Text(text) => SessionEvent::Line(text),
            FuzzEvent::EndOfInput => SessionEvent::EndOfInput,
        };
        let is_end = event == SessionEvent::EndOfInput;
        let actions = session.handle(event);

        if was_closed {
            assert!(actions.is_empty(), "closed session produced {actions:?}");
            continue;
        }

        if let Some(pos) = actions.iter().position(|a| *a == SessionAction::Exit) {
            assert_eq!(pos, actions.len() - 1, "Exit must be the last action");
            assert!(session.is_closed());
        }

        if is_end {
            assert!(session.is_closed(), "end of input must close the session");
        }

        assert!(session.directory().len().abs_diff(before) <= 1);
    }
});
