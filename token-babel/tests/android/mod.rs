//! Android XML resources and the Compose theme.

mod kotlin;
mod resources;
