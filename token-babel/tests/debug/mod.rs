//! JSON debug dump.

mod dump;
