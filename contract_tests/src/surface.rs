//! Declaration surface contract tests.
//!
//! These pin the parts of the surface shared with the device firmware:
//! the import module name, every symbol spelling, the constants, and the
//! enum discriminants. A failure here is a breaking wire change.
