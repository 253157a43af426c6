/// The runtime value type.
///
/// Defines `Value`, the tagged union every expression evaluates to, along with
/// truthiness and the plain and quoted display forms.
pub mod core;
/// Function values and signatures.
///
/// Defines user-defined and native functions, and the signatures used to
/// check a call's argument kinds before it runs.
pub mod function;
/// The closed set of value kinds.
///
/// Defines `ValueKind`, which doubles as the payload of type-tag values and
/// of reserved type names such as `INT`.
pub mod kind;
