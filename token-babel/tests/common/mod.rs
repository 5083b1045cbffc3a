//! Mode pairing, escaping and mode detection shared by every generator.

mod detection;
mod modes;
