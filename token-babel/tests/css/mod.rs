//! CSS and SCSS variable outputs.

mod variables;
