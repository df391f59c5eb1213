use std::io::{BufRead, Write};

use tracing::warn;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<R: BufRead, W: Write> Context<'_, R, W> {
    /// Executes `read NAME, ...;`.
    ///
    /// Each name is prompted for with `NAME =? `. A line that is not a
    /// 32-bit integer is reported on the output and the prompt repeats, with
    /// no limit on the number of attempts.
    ///
    /// # Errors
    /// - `InputClosed` if the input ends before a value is read.
    /// - `Io` if the console cannot be read or written.
    pub fn exec_read(&mut self, names: &[String], line: usize) -> EvalResult<()> {
        for name in names {
            let value = self.prompt_for(name, line)?;
            self.symbols.set(name, value);
        }
        Ok(())
    }

    /// Executes `write NAME, ...;`, printing one `NAME = value` line each.
    ///
    /// Nothing is printed unless every listed variable holds a value.
    ///
    /// # Errors
    /// - `Uninitialized` if any listed variable was never assigned.
    /// - `Io` if the output cannot be written.
    pub fn exec_write(&mut self, names: &[String], line: usize) -> EvalResult<()> {
        let values = names.iter()
                          .map(|name| {
                              self.symbols
                                  .get(name)
                                  .map(|value| (name, value))
                                  .ok_or_else(|| RuntimeError::Uninitialized { name: name.clone(),
                                                                               line })
                          })
                          .collect::<EvalResult<Vec<_>>>()?;

        for (name, value) in values {
            writeln!(self.output, "{name} = {value}").map_err(|source| RuntimeError::Io { source,
                                                                                          line })?;
        }
        Ok(())
    }

    fn prompt_for(&mut self, name: &str, line: usize) -> EvalResult<i32> {
        let io_error = move |source| RuntimeError::Io { source, line };
        let mut buffer = String::new();

        loop {
            write!(self.output, "{name} =? ").map_err(io_error)?;
            self.output.flush().map_err(io_error)?;

            buffer.clear();
            if self.input.read_line(&mut buffer).map_err(io_error)? == 0 {
                return Err(RuntimeError::InputClosed { name: name.to_string(),
                                                       line });
            }

            let text = buffer.trim();
            if let Ok(value) = text.parse::<i32>() {
                return Ok(value);
            }

            let rejected = RuntimeError::InvalidInput { input: text.to_string(),
                                                        line };
            warn!(%rejected, "rejected console input");
            writeln!(self.output, "{rejected}").map_err(io_error)?;
        }
    }
}
