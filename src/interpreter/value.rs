/// Runtime value representation.
///
/// Defines the `Value` enum covering every type a program can manipulate,
/// along with truthiness, equality, and display rendering. Strings and arrays
/// are reference-counted; arrays are additionally shared mutable, so two
/// bindings to the same array observe each other's writes.
pub mod core;

/// Callable values.
///
/// Defines the `Callable` trait implemented by user-defined closures and host
/// builtins, and the static table seeding the global frame with builtins.
pub mod callable;
