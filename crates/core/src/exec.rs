//! Blocking subprocess invocation
//!
//! Every external step runs through here: the command line is printed
//! before launch so the operator can replay it by hand, standard streams
//! are inherited so toolchain output streams live, and the call blocks
//! until the child exits.

use std::process::Command;

use crate::{CoreError, Result};

/// Render a command the way an operator would type it.
pub fn render(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Run a command to completion with inherited standard streams.
///
/// A non-zero exit becomes `CommandFailed` carrying the child's exit
/// code; no retry, no output capture.
pub fn run(mut cmd: Command) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    println!("> {}", render(&cmd));

    let status = cmd.status().map_err(|source| CoreError::Spawn {
        program: program.clone(),
        source,
    })?;

    if !status.success() {
        return Err(CoreError::CommandFailed {
            program,
            code: status.code(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_program_and_args() {
        let mut cmd = Command::new("docker");
        cmd.args(["build", "--platform", "linux/arm64", "-t", "tag", "."]);
        assert_eq!(render(&cmd), "docker build --platform linux/arm64 -t tag .");
    }

    #[test]
    #[cfg(unix)]
    fn run_succeeds_on_zero_exit() {
        assert!(run(Command::new("true")).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn run_reports_the_child_exit_code() {
        match run(Command::new("false")) {
            Err(CoreError::CommandFailed { program, code }) => {
                assert_eq!(program, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn run_surfaces_missing_programs() {
        let result = run(Command::new("hparse-definitely-not-installed"));
        assert!(matches!(result, Err(CoreError::Spawn { .. })));
    }
}
