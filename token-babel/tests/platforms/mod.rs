//! Whole-brand builds: plans rendered through the default registry.

mod render;
