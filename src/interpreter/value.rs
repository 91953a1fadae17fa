/// Core value representation.
///
/// Declares the `Value` enum covering every type a program can produce at
/// runtime, plus the `Function` payload for closures.
pub mod core;
/// Lexically scoped variable environments.
///
/// Declares `Environment` and the shared handle type that closures capture.
pub mod environment;
/// Hash-key derivation for hash-literal keys and hash indexing.
pub mod hash_key;
