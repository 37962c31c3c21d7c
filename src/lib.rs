//! Transistor-level simulation of the NMOS 6502.
//!
//! The chip is modelled as nodes (wires) and transistors (switches). Each
//! evaluation finds the groups of nodes joined by conducting transistors,
//! decides what drives every group, and keeps going until nothing changes
//! or the round cap is hit.
//!
//! [`Topology`] holds the static netlist tables and is shared through an
//! `Arc`; [`State`] holds one chip's bits; [`Cpu6502`] puts the named pins
//! and the host memory bridge on top.

pub mod bitmap;
pub mod cpu6502;
pub mod error;
pub mod memory;
pub mod netlist;
pub mod sim;
pub mod topology;
pub mod types;

pub use cpu6502::{ ChipStatus, Cpu6502, Pin };
pub use error::{ NetlistError, Result };
pub use memory::Memory;
pub use netlist::Netlist;
pub use sim::{ EvalStats, Group, SimConfig, State, DEFAULT_MAX_ROUNDS, DEFAULT_SO_LEVEL };
pub use topology::Topology;
pub use types::{ GroupValue, Node, Tran, Transistor };
