/// Machine state and the execution loop.
///
/// Holds the [`Machine`](self::core::Machine) type: the operand stack,
/// variable and array storage, the label map built by the pre-run scan, and
/// the program-counter loop that dispatches opcodes.
pub mod core;

/// Assignment, arithmetic, relational, and indexing opcodes.
pub mod ops;

/// The `READ` and `WRITE` opcodes over the machine's console streams.
pub mod io;

/// The trigonometric call opcodes.
pub mod builtin;

pub use self::core::Machine;
