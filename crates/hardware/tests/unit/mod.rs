//! # Unit Components
//!
//! This module organizes the unit tests by library module: shared types, the machine
//! core, the instruction set, the simulation driver, configuration, and statistics.
