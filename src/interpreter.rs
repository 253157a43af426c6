/// The environment module holds name bindings.
///
/// An environment is a chain of frames mapping names to values. The root frame
/// persists across programs run against it; child frames exist for the
/// duration of a block or a function call.
///
/// # Responsibilities
/// - Declares, assigns, looks up and removes bindings.
/// - Creates and releases frames for blocks and calls.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, and control flow.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports operators, calls, assignments, declarations and control flow.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation and
/// execution: null, integers, floats, booleans, characters, strings, type
/// tags and functions, together with the closed set of kinds they report.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `ValueKind` it reports.
/// - Defines function values and the signatures used to check calls.
/// - Provides truthiness and display forms.
pub mod value;
