/// The call mechanism and the native function table.
///
/// Resolves callees through the environment, checks call signatures, runs
/// user-defined bodies in their own frame and dispatches to host callbacks.
pub mod core;
/// The `print` native.
///
/// Writes its arguments to standard output, separated by spaces.
pub mod print;
/// The `assert` native.
///
/// Fails the program when its argument is `false`.
pub mod builtin;
