//! Swift enum outputs.

mod enums;
