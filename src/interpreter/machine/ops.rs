use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::machine::core::{ExecResult, Machine},
    rpn::Instruction,
};

impl<R: BufRead, W: Write> Machine<'_, R, W> {
    /// Executes an `OP` instruction: assignment, indexed assignment, one of
    /// the four arithmetic operators, or one of the four relations.
    pub(super) fn execute_operation(&mut self, instruction: &Instruction) -> ExecResult<()> {
        let line = instruction.line;
        match instruction.value.as_str() {
            "=" => {
                let value = self.pop_int(line)?;
                let name = self.pop_name(line)?;
                self.store_scalar(&name, value, line)
            },
            "[]=" => {
                let value = self.pop_int(line)?;
                let index = self.pop_int(line)?;
                let name = self.pop_name(line)?;
                self.store_element(&name, index, value, line)
            },
            "+" | "-" | "*" | "/" | "~" | ">" | "<" | "!" => {
                let b = self.pop_int(line)?;
                let a = self.pop_int(line)?;
                let result = match instruction.value.as_str() {
                    "+" => a.checked_add(b).ok_or(RuntimeError::Overflow { line })?,
                    "-" => a.checked_sub(b).ok_or(RuntimeError::Overflow { line })?,
                    "*" => a.checked_mul(b).ok_or(RuntimeError::Overflow { line })?,
                    "/" => {
                        if b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        a.checked_div(b).ok_or(RuntimeError::Overflow { line })?
                    },
                    "~" => i64::from(a == b),
                    ">" => i64::from(a > b),
                    "<" => i64::from(a < b),
                    "!" => i64::from(a != b),
                    _ => unreachable!(),
                };
                self.stack.push(result.into());
                Ok(())
            },
            other => Err(RuntimeError::UnknownOperator { op: other.to_string(),
                                                         line }),
        }
    }

    /// Executes the `INDEX` instruction: pops the index and the array name,
    /// bounds-checks, and pushes the element value.
    pub(super) fn execute_index(&mut self, line: usize) -> ExecResult<()> {
        let index = self.pop_int(line)?;
        let name = self.pop_name(line)?;
        let value = self.load_element(&name, index, line)?;
        self.stack.push(value.into());
        Ok(())
    }

    /// Writes a value into a scalar variable.
    pub(super) fn store_scalar(&mut self, name: &str, value: i64, line: usize) -> ExecResult<()> {
        match self.scalars.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => {
                if self.arrays.contains_key(name) {
                    return Err(RuntimeError::ArrayNotIndexed { name: name.to_string(),
                                                               line });
                }
                Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                    line })
            },
        }
    }

    /// Writes a value into an array element, bounds-checking the index.
    pub(super) fn store_element(&mut self,
                                name: &str,
                                index: i64,
                                value: i64,
                                line: usize)
                                -> ExecResult<()> {
        let elements =
            self.arrays
                .get_mut(name)
                .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                               line })?;
        let slot = element_index(elements.len(), index, line)?;
        elements[slot] = value;
        Ok(())
    }

    /// Reads a value from an array element, bounds-checking the index.
    pub(super) fn load_element(&self, name: &str, index: i64, line: usize) -> ExecResult<i64> {
        let elements =
            self.arrays
                .get(name)
                .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                               line })?;
        let slot = element_index(elements.len(), index, line)?;
        Ok(elements[slot])
    }
}

#[allow(clippy::cast_sign_loss)]
fn element_index(size: usize, index: i64, line: usize) -> ExecResult<usize> {
    if index < 0 || index as usize >= size {
        return Err(RuntimeError::IndexOutOfBounds { size,
                                                    found: index,
                                                    line });
    }
    Ok(index as usize)
}
