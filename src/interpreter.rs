//! Interpreter Module
//!
//! Runs command lines against a session's Store.
//!
//! ## Responsibilities
//! - Execute `;`-separated command lines and print their results
//! - Batch mode (commands from the process arguments) and interactive mode
//!   (prompt, read a line, repeat)
//! - Signal `exit` as an explicit [`Flow::Exit`] value
//! - Top-level [`run`]: load, interpret, flush, including a best-effort
//!   flush when the session dies on a fatal error

use std::io::{BufRead, Write};

use crate::command::{split_line, Command, Response};
use crate::config::Config;
use crate::database::Database;
use crate::error::{CommandError, FilemapError, Result};
use crate::store::Store;

/// Where commands come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Commands given on the command line; any command error is fatal
    Batch,

    /// Commands read line by line; command errors are reported and skipped
    Interactive,
}

/// What the session should do after a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// How the process should end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    /// Process exit code
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

/// Command interpreter bound to one Store
pub struct Interpreter<'a> {
    store: &'a mut Store,
    mode: Mode,
}

impl<'a> Interpreter<'a> {
    pub fn new(store: &'a mut Store, mode: Mode) -> Self {
        Self { store, mode }
    }

    /// Apply a single command to the Store
    ///
    /// `Exit` has no response; the caller turns it into [`Flow::Exit`].
    pub fn execute(&mut self, command: Command) -> Option<Response> {
        let response = match command {
            Command::Put { key, value } => match self.store.put(key, value) {
                Some(previous) => Response::Overwrite(previous),
                None => Response::New,
            },
            Command::Get { key } => match self.store.get(&key) {
                Some(value) => Response::Found(value.to_string()),
                None => Response::NotFound,
            },
            Command::Remove { key } => match self.store.remove(&key) {
                Some(_) => Response::Removed,
                None => Response::NotFound,
            },
            Command::List => Response::Keys(
                self.store.list_keys().into_iter().map(str::to_string).collect(),
            ),
            Command::Exit => return None,
        };
        Some(response)
    }

    /// Run every command on a line, writing results to `out` and reported
    /// errors to `err`
    ///
    /// Stops at the first `exit`. In batch mode a wrong-arity error is
    /// returned and ends the session; unknown commands are only reported.
    pub fn run_line<W: Write, E: Write>(&mut self, line: &str, out: &mut W, err: &mut E) -> Result<Flow> {
        for text in split_line(line) {
            let command = match Command::parse(text) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(err, "{e}")?;
                    let fatal = self.mode == Mode::Batch
                        && matches!(e, CommandError::WrongArity { .. });
                    if fatal {
                        return Err(e.into());
                    }
                    continue;
                }
            };

            tracing::trace!(command = command.name(), "executing");
            match self.execute(command) {
                Some(response) => writeln!(out, "{response}")?,
                None => return Ok(Flow::Exit),
            }
        }
        Ok(Flow::Continue)
    }

    /// Batch mode: the arguments form one command line
    pub fn run_batch<W: Write, E: Write>(&mut self, args: &[String], out: &mut W, err: &mut E) -> Result<()> {
        let line = args.join(" ");
        self.run_line(&line, out, err)?;
        Ok(())
    }

    /// Interactive mode: prompt and read until `exit` or end of input
    pub fn run_interactive<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        prompt: &str,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{prompt}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                return Ok(());
            }

            if self.run_line(&line, out, err)? == Flow::Exit {
                return Ok(());
            }
        }
    }
}

/// Run a whole session: load the database, interpret, flush.
///
/// Non-empty `commands` selects batch mode, otherwise lines are read from
/// `input`. On any fatal error the current contents are still flushed; a
/// failure of that flush is reported on its own.
pub fn run<R: BufRead, W: Write, E: Write>(
    config: &Config,
    commands: &[String],
    input: R,
    out: &mut W,
    err: &mut E,
) -> ExitStatus {
    let mode = if commands.is_empty() {
        Mode::Interactive
    } else {
        Mode::Batch
    };

    let mut database = Database::new(config.db_file.clone());
    let result = match database.load() {
        Ok(()) => {
            let mut interpreter = Interpreter::new(database.store_mut(), mode);
            match mode {
                Mode::Batch => interpreter.run_batch(commands, out, err),
                Mode::Interactive => interpreter.run_interactive(input, &config.prompt, out, err),
            }
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => match database.flush() {
            Ok(_) => ExitStatus::Success,
            Err(e) => {
                report(err, &e);
                ExitStatus::Failure
            }
        },
        Err(e) => {
            // Command errors were already printed where they happened
            if !matches!(e, FilemapError::Command(_)) {
                report(err, &e);
            }
            tracing::warn!(error = %e, "session aborted, flushing current contents");
            if let Err(flush_err) = database.flush() {
                report(err, &flush_err);
            }
            ExitStatus::Failure
        }
    }
}

fn report<E: Write>(err: &mut E, e: &FilemapError) {
    // The error stream itself failing leaves nowhere to report to
    let _ = writeln!(err, "{e}");
}
