//! Static adjacency tables derived from a netlist.
//!
//! Everything here is computed once and never mutated, so a single
//! `Topology` can sit behind an `Arc` and be shared by any number of chips.

use crate::bitmap::NodeSet;
use crate::netlist::Netlist;
use crate::types::{ Node, Tran, Transistor };
use log::debug;

/// A transistor seen from one of its two channel terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection
{
    pub t: Tran,
    pub other: Node,
}

impl Connection
{
    pub fn new(t: Tran, other: Node) -> Connection
    {
        Connection { t, other }
    }
}

/// Per-node lists packed into one array, indexed through an offset table.
#[derive(Debug, Clone)]
struct Buckets<T>
{
    offset: Vec<usize>,
    items: Vec<T>,
}

impl<T: Copy> Buckets<T>
{
    /// Counting-sort fill: `count[n]` sizes bucket `n`, then `entries`
    /// is walked again to place every item in order.
    fn build<I>(count: &[usize], fill: T, entries: I) -> Buckets<T>
    where
        I: Iterator<Item = (Node, T)>,
    {
        let mut offset = vec![0usize; count.len() + 1];
        let total = count.iter().enumerate().fold(0, |off, (n, c)|
                    {
                        offset[n] = off;
                        off + c
                    });
        offset[count.len()] = total;

        let mut items = vec![fill; total];
        let mut cursor = offset[..count.len()].to_vec();
        for (n, item) in entries
        {
            items[cursor[n]] = item;
            cursor[n] += 1;
        }

        Buckets { offset, items }
    }

    fn from_lists(lists: &[Vec<T>], fill: T) -> Buckets<T>
    {
        let count: Vec<usize> = lists.iter().map(|l| l.len()).collect();
        Buckets::build(
            &count,
            fill,
            lists.iter().enumerate().flat_map(|(n, l)| l.iter().map(move |x| (n, *x))),
        )
    }

    #[inline]
    fn get(&self, n: Node) -> &[T]
    {
        &self.items[self.offset[n]..self.offset[n + 1]]
    }

    #[inline]
    fn total(&self) -> usize
    {
        self.items.len()
    }
}

#[derive(Debug, Clone)]
pub struct Topology
{
    nodes_count: usize,

    vss: Node,
    vcc: Node,

    node_is_pullup: Vec<bool>,
    transistors: Vec<Transistor>,

    // transistors gated by each node
    node_gates: Buckets<Tran>,
    // transistors with the node on c1 or c2, paired with the far terminal
    node_connections: Buckets<Connection>,
    // nodes to revisit when the node falls
    node_depend: Buckets<Node>,
    // nodes to revisit when the node rises
    node_depend_left: Buckets<Node>,
}

impl Topology
{
    /// Builds the adjacency tables.
    ///
    /// `pullup.len()` is the node count. Panics if any transistor terminal or
    /// rail is out of range; run `Netlist::validate` first on untrusted data.
    pub fn new(trans: &[Transistor], pullup: &[bool], vss: Node, vcc: Node) -> Topology
    {
        let nodes_count = pullup.len();
        assert!(vss < nodes_count && vcc < nodes_count, "rail index out of range");
        assert_ne!(vss, vcc, "vss and vcc must be distinct nodes");
        for (i, t) in trans.iter().enumerate()
        {
            assert!(
                t.gate() < nodes_count && t.c1() < nodes_count && t.c2() < nodes_count,
                "transistor {} ({:?}) is outside the {} node netlist", i, t, nodes_count
            );
        }

        let is_rail = |n: Node| n == vss || n == vcc;

        let mut gate_count = vec![0usize; nodes_count];
        let mut c1c2_count = vec![0usize; nodes_count];
        for t in trans
        {
            gate_count[t.gate()] += 1;
            c1c2_count[t.c1()] += 1;
            c1c2_count[t.c2()] += 1;
        }

        let node_gates = Buckets::build(
            &gate_count,
            0,
            trans.iter().enumerate().map(|(i, t)| (t.gate(), i)),
        );

        let node_connections = Buckets::build(
            &c1c2_count,
            Connection::new(0, 0),
            trans.iter().enumerate().flat_map(|(i, t)|
            {
                [(t.c1(), Connection::new(i, t.c2())), (t.c2(), Connection::new(i, t.c1()))]
            }),
        );

        let mut depend = vec![Vec::new(); nodes_count];
        let mut depend_left = vec![Vec::new(); nodes_count];
        let mut seen = NodeSet::new(nodes_count);
        let mut seen_left = NodeSet::new(nodes_count);

        for n in 0..nodes_count
        {
            seen.clear();
            seen_left.clear();

            for &i in node_gates.get(n)
            {
                let t = &trans[i];
                let (a, b) = (t.c1(), t.c2());

                if !is_rail(a) && seen.insert(a)
                {
                    depend[n].push(a);
                }
                if !is_rail(b) && seen.insert(b)
                {
                    depend[n].push(b);
                }

                let left = if !is_rail(a) { a } else { b };
                if !is_rail(left) && seen_left.insert(left)
                {
                    depend_left[n].push(left);
                }
            }
        }

        let topology = Topology {
            nodes_count,
            vss,
            vcc,
            node_is_pullup: pullup.to_vec(),
            transistors: trans.to_vec(),
            node_gates,
            node_connections,
            node_depend: Buckets::from_lists(&depend, 0),
            node_depend_left: Buckets::from_lists(&depend_left, 0),
        };

        debug!(
            "topology: {} nodes, {} transistors, {} channel connections, {} dependents",
            topology.nodes_count,
            topology.transistors.len(),
            topology.node_connections.total(),
            topology.node_depend.total()
        );

        topology
    }

    pub fn from_netlist(netlist: &Netlist) -> Topology
    {
        Topology::new(&netlist.transdefs, &netlist.pullup, netlist.vss, netlist.vcc)
    }

    #[inline]
    pub fn nodes_count(&self) -> usize
    {
        self.nodes_count
    }

    #[inline]
    pub fn transistors_count(&self) -> usize
    {
        self.transistors.len()
    }

    #[inline]
    pub fn vss(&self) -> Node
    {
        self.vss
    }

    #[inline]
    pub fn vcc(&self) -> Node
    {
        self.vcc
    }

    #[inline]
    pub fn is_rail(&self, node: Node) -> bool
    {
        node == self.vss || node == self.vcc
    }

    /// Power-on pull-up table.
    #[inline]
    pub fn pullups(&self) -> &[bool]
    {
        &self.node_is_pullup
    }

    #[inline]
    pub fn transistor(&self, t: Tran) -> Transistor
    {
        self.transistors[t]
    }

    /// Transistors whose gate is `node`.
    #[inline]
    pub fn gates(&self, node: Node) -> &[Tran]
    {
        self.node_gates.get(node)
    }

    /// Every transistor with `node` on a channel terminal.
    #[inline]
    pub fn connections(&self, node: Node) -> &[Connection]
    {
        self.node_connections.get(node)
    }

    /// Nodes that need re-evaluating after `node` changes to `value`.
    ///
    /// Rising only needs one side of each gated transistor, because the
    /// transistor now joins both sides into one group. Falling splits them,
    /// so both sides go back on the list.
    #[inline]
    pub fn dependents(&self, node: Node, value: bool) -> &[Node]
    {
        if value
        {
            self.node_depend_left.get(node)
        }
        else
        {
            self.node_depend.get(node)
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const VSS: Node = 0;
    const VCC: Node = 1;

    // 2 and 3 are joined by t0 (gate 4); t1 pulls 2 down (gate 5);
    // t2 connects 3 to vcc (gate 4); t3 is gated by 4 between 2 and 3 again.
    fn sample() -> Topology
    {
        let trans = [
            Transistor(4, 2, 3),
            Transistor(5, 2, VSS),
            Transistor(4, VCC, 3),
            Transistor(4, 3, 2),
        ];
        Topology::new(&trans, &[false, false, true, false, false, false], VSS, VCC)
    }

    #[test]
    fn gates_are_grouped_in_order()
    {
        let topology = sample();
        assert_eq!(topology.gates(4), &[0, 2, 3]);
        assert_eq!(topology.gates(5), &[1]);
        assert!(topology.gates(2).is_empty());
        assert_eq!(topology.nodes_count(), 6);
        assert_eq!(topology.transistors_count(), 4);
    }

    #[test]
    fn connections_are_symmetric()
    {
        let topology = sample();
        for t in 0..topology.transistors_count()
        {
            let tr = topology.transistor(t);
            assert_eq!(
                topology.connections(tr.c1()).iter().filter(|c| c.t == t && c.other == tr.c2()).count(),
                1
            );
            assert_eq!(
                topology.connections(tr.c2()).iter().filter(|c| c.t == t && c.other == tr.c1()).count(),
                1
            );
        }
        assert_eq!(
            topology.connections(2),
            &[Connection::new(0, 3), Connection::new(1, VSS), Connection::new(3, 3)]
        );
    }

    #[test]
    fn dependents_skip_rails_and_duplicates()
    {
        let topology = sample();
        // falling: every non-rail terminal, once each
        assert_eq!(topology.dependents(4, false), &[2, 3]);
        // rising: c1 unless c1 is a rail
        assert_eq!(topology.dependents(4, true), &[2, 3]);
        assert_eq!(topology.dependents(5, false), &[2]);
        assert_eq!(topology.dependents(5, true), &[2]);
        assert!(topology.dependents(VSS, false).is_empty());
    }

    #[test]
    fn left_dependent_takes_c2_when_c1_is_a_rail()
    {
        let trans = [Transistor(2, VCC, 3), Transistor(2, 4, 5)];
        let topology = Topology::new(&trans, &[false; 6], VSS, VCC);
        assert_eq!(topology.dependents(2, true), &[3, 4]);
        assert_eq!(topology.dependents(2, false), &[3, 4, 5]);
    }

    #[test]
    fn rails_only_transistor_has_no_dependents()
    {
        let topology = Topology::new(&[Transistor(2, VCC, VSS)], &[false; 3], VSS, VCC);
        assert!(topology.dependents(2, true).is_empty());
        assert!(topology.dependents(2, false).is_empty());
        assert!(topology.is_rail(VCC) && topology.is_rail(VSS) && !topology.is_rail(2));
    }

    #[test]
    #[should_panic(expected = "outside the 3 node netlist")]
    fn dangling_terminal_panics()
    {
        Topology::new(&[Transistor(2, 7, VSS)], &[false; 3], VSS, VCC);
    }
}
