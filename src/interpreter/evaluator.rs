/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, boolean logic and type tests.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, `not` and `typeof`.
pub mod unary;

/// Core evaluation logic and evaluator state.
///
/// Contains the evaluator itself, its options, and expression evaluation.
pub mod core;

/// Statement execution.
///
/// Runs declarations, blocks, conditionals, loops, `match` and `return`, and
/// manages the frames of nested blocks.
pub mod statement;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and native function calls, signature checking, and
/// the table of natives available by default.
pub mod function;
