//! Line driver: executes session actions against real reader/writer handles.

use std::io::{BufRead, Write};

use crate::{
    config::SessionConfig,
    error::CliError,
    session::{Session, SessionAction, SessionEvent},
};

/// Whether the driver should keep feeding events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run a menu session until the user exits or `input` is exhausted.
///
/// Output is flushed after every batch of actions so prompts are visible
/// before the next read blocks. Returns the closed session so callers can
/// inspect the final directory.
///
/// # Errors
///
/// Returns `CliError::Io` if reading `input` or writing `output` fails.
pub fn run<R, W>(mut input: R, mut output: W, config: &SessionConfig) -> Result<Session, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(config.clone());
    if execute(&mut output, session.start())? == Flow::Exit {
        return Ok(session);
    }

    let mut buf = String::new();
    loop {
        buf.clear();
        let event = if input.read_line(&mut buf)? == 0 {
            SessionEvent::EndOfInput
        } else {
            SessionEvent::Line(strip_line_ending(&buf).to_owned())
        };

        if execute(&mut output, session.handle(event))? == Flow::Exit {
            break;
        }
    }

    Ok(session)
}

fn execute(output: &mut impl Write, actions: Vec<SessionAction>) -> Result<Flow, CliError> {
    let mut flow = Flow::Continue;
    for action in actions {
        match action {
            SessionAction::Write(text) => output.write_all(text.as_bytes())?,
            SessionAction::Exit => flow = Flow::Exit,
        }
    }
    output.flush()?;
    Ok(flow)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_line_ending_handles_crlf() {
        assert_eq!(strip_line_ending("Bob\r\n"), "Bob");
        assert_eq!(strip_line_ending("Bob\n"), "Bob");
        assert_eq!(strip_line_ending("Bob"), "Bob");
        assert_eq!(strip_line_ending(" Bob \n"), " Bob ");
    }
}
