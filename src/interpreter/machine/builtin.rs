use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::machine::core::{ExecResult, Machine},
    rpn::OpCode,
    util::num::f64_to_i64_trunc,
};

impl<R: BufRead, W: Write> Machine<'_, R, W> {
    /// Executes one of the trigonometric call opcodes.
    ///
    /// The argument is treated as radians; the result truncates toward
    /// zero back into the integer value domain, so `sin(1)` yields `0`.
    /// Cotangent is a fault where the tangent is zero.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn execute_trig(&mut self, op: OpCode, line: usize) -> ExecResult<()> {
        let x = self.pop_int(line)? as f64;

        let result = match op {
            OpCode::CallSin => x.sin(),
            OpCode::CallCos => x.cos(),
            OpCode::CallTan => x.tan(),
            OpCode::CallCot => {
                let tangent = x.tan();
                if tangent == 0.0 {
                    return Err(RuntimeError::CotangentUndefined { line });
                }
                1.0 / tangent
            },
            _ => unreachable!("caller dispatches only the call opcodes"),
        };

        self.stack.push(f64_to_i64_trunc(result, line)?.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        interpreter::{symbol::SymbolTable, value::StackItem},
        rpn::{Instruction, Program},
    };

    fn run_calls(instructions: Vec<Instruction>) -> ExecResult<Vec<StackItem>> {
        let program = Program { instructions,
                                symbols: SymbolTable::new() };
        let mut machine = Machine::new(&program, io::empty(), Vec::new())?;
        machine.run()?;
        Ok(machine.stack.clone())
    }

    fn call(op: OpCode, argument: &str) -> Vec<Instruction> {
        vec![Instruction::new(OpCode::PushConst, argument, 1),
             Instruction::new(op, "", 1)]
    }

    #[test]
    fn results_truncate_toward_zero() {
        assert_eq!(run_calls(call(OpCode::CallSin, "1")).unwrap(), vec![StackItem::Int(0)]);
        assert_eq!(run_calls(call(OpCode::CallCos, "0")).unwrap(), vec![StackItem::Int(1)]);
        assert_eq!(run_calls(call(OpCode::CallTan, "1")).unwrap(), vec![StackItem::Int(1)]);
    }

    #[test]
    fn cotangent_is_undefined_at_zero() {
        let err = run_calls(call(OpCode::CallCot, "0")).unwrap_err();
        assert!(matches!(err, RuntimeError::CotangentUndefined { line: 1 }));
    }

    #[test]
    fn cotangent_of_one_truncates_to_zero() {
        // 1 / tan(1) is roughly 0.642.
        assert_eq!(run_calls(call(OpCode::CallCot, "1")).unwrap(), vec![StackItem::Int(0)]);
    }
}
