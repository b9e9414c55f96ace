use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::machine::core::{ExecResult, Machine},
    rpn::Instruction,
    util::num::parse_i64_checked,
};

impl<R: BufRead, W: Write> Machine<'_, R, W> {
    /// Executes a `READ` instruction.
    ///
    /// One integer is consumed from the input stream first; the payload
    /// then selects the destination: `IN` pops a scalar name, `IN[]` pops
    /// an index and an array name.
    pub(super) fn execute_read(&mut self, instruction: &Instruction) -> ExecResult<()> {
        let line = instruction.line;

        if self.prompt {
            write!(self.output, "Input (integer): ").map_err(|source| RuntimeError::Io { source,
                                                                                         line })?;
            self.output
                .flush()
                .map_err(|source| RuntimeError::Io { source, line })?;
        }

        let value = self.next_input_integer(line)?;
        match instruction.value.as_str() {
            "IN" => {
                let name = self.pop_name(line)?;
                self.store_scalar(&name, value, line)
            },
            "IN[]" => {
                let index = self.pop_int(line)?;
                let name = self.pop_name(line)?;
                self.store_element(&name, index, value, line)
            },
            other => Err(RuntimeError::UnknownOperator { op: other.to_string(),
                                                         line }),
        }
    }

    /// Executes the `WRITE` instruction: pops a value and emits it on the
    /// output stream as one line.
    pub(super) fn execute_write(&mut self, line: usize) -> ExecResult<()> {
        let value = self.pop_int(line)?;
        writeln!(self.output, "{value}").map_err(|source| RuntimeError::Io { source, line })
    }

    /// Yields the next whitespace-delimited integer from the input stream.
    ///
    /// Several values may share one line; lines are split eagerly and the
    /// pieces queue up for subsequent reads. End of input and non-numeric
    /// pieces are faults.
    fn next_input_integer(&mut self, line: usize) -> ExecResult<i64> {
        loop {
            if let Some(text) = self.pending_input.pop_front() {
                return parse_i64_checked(&text, RuntimeError::InvalidInput { line });
            }

            let mut buffer = String::new();
            let read = self.input
                           .read_line(&mut buffer)
                           .map_err(|source| RuntimeError::Io { source, line })?;
            if read == 0 {
                return Err(RuntimeError::InvalidInput { line });
            }
            self.pending_input
                .extend(buffer.split_whitespace().map(str::to_string));
        }
    }
}
