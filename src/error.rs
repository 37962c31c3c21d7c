use crate::types::{ Node, Tran };

/// Problems found while loading or checking a netlist dataset.
///
/// These only surface before a chip is built; once a topology exists the
/// simulation itself has no failure path.
#[derive(Debug, thiserror::Error)]
pub enum NetlistError
{
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed netlist json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("netlist has no nodes")]
    Empty,

    #[error("transistor {transistor} references node {node}, but the netlist has {nodes} nodes")]
    NodeOutOfRange
    {
        transistor: Tran,
        node: Node,
        nodes: usize,
    },

    #[error("{rail} rail index {node} is outside the {nodes} node netlist")]
    RailOutOfRange
    {
        rail: &'static str,
        node: Node,
        nodes: usize,
    },

    #[error("vcc and vss are both node {0}")]
    RailsCoincide(Node),

    #[error("netlist has {nodes} nodes, but the 6502 label table needs at least {needed}")]
    TooSmall
    {
        nodes: usize,
        needed: usize,
    },

    #[error("netlist puts {rail} at node {found}, the 6502 label table expects {expected}")]
    RailMismatch
    {
        rail: &'static str,
        found: Node,
        expected: Node,
    },
}

pub type Result<T> = std::result::Result<T, NetlistError>;
