//! JavaScript module and TypeScript declarations.

mod module;
