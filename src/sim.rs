use crate::bitmap::{ Bitmap, NodeSet };
use crate::topology::Topology;
use crate::types::*;
use log::trace;
use std::mem::swap;
use std::sync::Arc;

/// Propagation rounds `eval` runs before giving up on a settling network.
pub const DEFAULT_MAX_ROUNDS: usize = 100;

/// Level the 6502 SO pin is driven to at power-on.
pub const DEFAULT_SO_LEVEL: bool = false;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig
{
    pub max_rounds: usize,
    pub so_level: bool,
}

impl Default for SimConfig
{
    fn default() -> SimConfig
    {
        SimConfig {
            max_rounds: DEFAULT_MAX_ROUNDS,
            so_level: DEFAULT_SO_LEVEL,
        }
    }
}

/// Running counters, for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats
{
    pub evals: u64,
    pub rounds: u64,
    /// Evals that hit the round cap with nodes still queued. Those nodes
    /// are dropped without being evaluated.
    pub truncated: u64,
}

/// Per-node and per-transistor mutable bits of one chip.
#[derive(Debug, Clone)]
pub struct Bits
{
    pub node_is_pullup: Bitmap,
    pub node_is_pulldown: Bitmap,
    pub node_value: Bitmap,
    pub tran_is_on: Bitmap,
}

impl Bits
{
    pub fn new(topology: &Topology) -> Bits
    {
        Bits {
            node_is_pullup: Bitmap::from_bools(topology.pullups()),
            node_is_pulldown: Bitmap::new(topology.nodes_count()),
            node_value: Bitmap::new(topology.nodes_count()),
            tran_is_on: Bitmap::new(topology.transistors_count()),
        }
    }
}

/// Scratch space for collecting the nodes joined by conducting transistors.
#[derive(Debug, Clone)]
pub struct Group
{
    group: NodeSet,
    group_has_value: GroupValue,
    stack: Vec<Node>,
}

impl Group
{
    pub fn new(nodes_count: usize) -> Group
    {
        Group {
            group: NodeSet::new(nodes_count),
            group_has_value: GroupValue::Nothing,
            stack: Vec::with_capacity(nodes_count),
        }
    }

    #[inline]
    pub fn members(&self) -> &[Node]
    {
        self.group.as_slice()
    }

    #[inline]
    pub fn has_value(&self) -> GroupValue
    {
        self.group_has_value
    }

    #[inline]
    pub fn group_value(&self) -> bool
    {
        self.group_has_value.level()
    }

    /// Collects every node reachable from `node` through conducting
    /// transistors and classifies what drives them.
    ///
    /// Depth-first with an explicit stack. Neighbours are pushed in reverse
    /// and the visited check happens on pop, so nodes are visited in the
    /// same order a recursive walk would visit them; classification depends
    /// on that order. Rails end the walk on their branch and are never
    /// members.
    pub fn solve(&mut self, topology: &Topology, bits: &Bits, node: Node)
    {
        self.group.clear();
        self.group_has_value = GroupValue::Nothing;
        self.stack.clear();
        self.stack.push(node);

        while let Some(node) = self.stack.pop()
        {
            if node == topology.vss()
            {
                self.group_has_value = GroupValue::Vss;
                continue;
            }

            if node == topology.vcc()
            {
                if self.group_has_value != GroupValue::Vss
                {
                    self.group_has_value = GroupValue::Vcc;
                }
                continue;
            }

            if !self.group.insert(node)
            {
                continue;
            }

            self.group_has_value = self.group_has_value.absorb(
                bits.node_is_pullup.get(node),
                bits.node_is_pulldown.get(node),
                bits.node_value.get(node),
            );

            for c in topology.connections(node).iter().rev()
            {
                if bits.tran_is_on.get(c.t)
                {
                    self.stack.push(c.other);
                }
            }
        }
    }
}

/// One simulated chip: its bits, its worklists and a shared topology.
#[derive(Debug, Clone)]
pub struct State
{
    topology: Arc<Topology>,
    bits: Bits,
    group: Group,

    // Nodes that we're working on
    current: NodeSet,

    // Nodes that we should work on
    queue: NodeSet,

    max_rounds: usize,
    stats: EvalStats,
}

impl State
{
    /// Fresh state: pull-ups from the topology's table, everything else low,
    /// all transistors off. Nothing has been evaluated yet.
    pub fn new(topology: Arc<Topology>, max_rounds: usize) -> State
    {
        let nodes_count = topology.nodes_count();
        State {
            bits: Bits::new(&topology),
            group: Group::new(nodes_count),
            current: NodeSet::new(nodes_count),
            queue: NodeSet::new(nodes_count),
            topology,
            max_rounds,
            stats: EvalStats::default(),
        }
    }

    #[inline]
    pub fn topology(&self) -> &Arc<Topology>
    {
        &self.topology
    }

    #[inline]
    pub fn bits(&self) -> &Bits
    {
        &self.bits
    }

    #[inline]
    pub fn stats(&self) -> EvalStats
    {
        self.stats
    }

    /// Nodes waiting for the next `eval`.
    #[inline]
    pub fn pending(&self) -> &[Node]
    {
        self.queue.as_slice()
    }

    /// Runs the group solver from `node` without touching any state.
    pub fn solve_group(&mut self, node: Node) -> &Group
    {
        self.group.solve(&self.topology, &self.bits, node);
        &self.group
    }

    pub fn recalc_node(&mut self, node: Node)
    {
        let State { topology, bits, group, queue, .. } = self;

        group.solve(topology, bits, node);

        let newv = group.group_value();
        // set all nodes to the group state
        // check and switch all the transistors connected
        // collect all nodes connected to those transistors
        for &n in group.members()
        {
            if bits.node_value.get(n) == newv
            {
                continue;
            }

            bits.node_value.set(n, newv);
            for &t in topology.gates(n)
            {
                bits.tran_is_on.set(t, newv);
            }

            for &nn in topology.dependents(n, newv)
            {
                queue.insert(nn);
            }
        }
    }

    /// Propagates queued changes until nothing is left or the round cap is
    /// reached. Whatever is still queued at the cap is discarded.
    pub fn recalc_node_list(&mut self)
    {
        self.stats.evals += 1;
        let mut settled = false;

        for _ in 0..self.max_rounds
        {
            swap(&mut self.current, &mut self.queue);

            if self.current.is_empty()
            {
                settled = true;
                break;
            }

            self.queue.clear();
            self.stats.rounds += 1;

            for i in 0..self.current.len()
            {
                let n = self.current.as_slice()[i];
                self.recalc_node(n);
            }
        }

        if !settled && !self.queue.is_empty()
        {
            self.stats.truncated += 1;
            trace!(
                "propagation stopped after {} rounds with {} nodes unsettled",
                self.max_rounds,
                self.queue.len()
            );
        }

        self.queue.clear();
    }

    #[inline]
    pub fn eval(&mut self)
    {
        self.recalc_node_list();
    }

    /// Queues every node and propagates.
    pub fn stabilize_chip(&mut self)
    {
        for n in 0..self.topology.nodes_count()
        {
            self.queue.insert(n);
        }
        self.recalc_node_list();
    }

    /// Forces a node from outside: pulled up when `v`, pulled down otherwise.
    #[inline]
    pub fn set_node_no_recalc(&mut self, node: Node, v: bool)
    {
        self.bits.node_is_pullup.set(node, v);
        self.bits.node_is_pulldown.set(node, !v);
        self.queue.insert(node);
    }

    #[inline]
    pub fn set_node(&mut self, node: Node, v: bool)
    {
        self.set_node_no_recalc(node, v);
        self.recalc_node_list();
    }

    /// Settled level of a node. Rails are never evaluated, so their stored
    /// bit stays low.
    #[inline]
    pub fn read_node(&self, node: Node) -> bool
    {
        self.bits.node_value.get(node)
    }

    /// Gathers `list` into an integer, `list[0]` being bit 0.
    #[inline]
    pub fn read_nodes(&self, list: &[Node]) -> u16
    {
        debug_assert!(list.len() <= 16);
        list.iter()
            .rev()
            .fold(0, |result, &n| (result << 1) | self.read_node(n) as u16)
    }

    /// Drives `list` from `value`, `list[0]` taking bit 0. Each bit is
    /// propagated before the next one is written.
    pub fn write_nodes(&mut self, list: &[Node], mut value: u16)
    {
        debug_assert!(list.len() <= 16);
        for &n in list
        {
            self.set_node(n, (value & 1) != 0);
            value >>= 1;
        }
    }
}
