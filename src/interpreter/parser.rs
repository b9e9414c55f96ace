/// Parser state and shared helpers.
///
/// Holds the [`Parser`](self::core::Parser) type with its token cursor,
/// postfix output, symbol table, and label counter, plus the
/// `peek`/`advance`/`expect` primitives every production uses.
pub mod core;

/// Declaration productions.
///
/// Parses the `int`/`arr` declaration prelude and the single `begin … end`
/// program block, populating the symbol table.
pub mod declarations;

/// Statement productions.
///
/// Parses assignments, `if`/`else`, `while`, `input`, `output`, and
/// statement-form trigonometric calls, emitting their postfix patterns.
pub mod statement;

/// Expression and condition productions.
///
/// Parses the arithmetic grammar and relational conditions, emitting
/// operands and operators in postfix order.
pub mod expression;

pub use self::core::Parser;
