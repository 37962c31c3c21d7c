use std::sync::Arc;
use transim6502::{ Node, State, Topology, Transistor, DEFAULT_MAX_ROUNDS };

const VSS: Node = 0;
const VCC: Node = 1;

const S: Node = 2;
const R: Node = 3;
const Q: Node = 4;
const QB: Node = 5;

/// Two cross-coupled NMOS NOR gates.
fn sr_latch() -> Arc<Topology>
{
    let trans = [
        Transistor(R, Q, VSS),
        Transistor(QB, Q, VSS),
        Transistor(S, QB, VSS),
        Transistor(Q, QB, VSS),
    ];
    let pullup = [false, false, false, false, true, true];
    Arc::new(Topology::new(&trans, &pullup, VSS, VCC))
}

fn powered(topology: &Arc<Topology>) -> State
{
    let mut state = State::new(Arc::clone(topology), DEFAULT_MAX_ROUNDS);
    state.set_node(S, false);
    state.set_node(R, false);
    state.stabilize_chip();
    state
}

#[test]
fn latch_sets_resets_and_holds()
{
    let topology = sr_latch();
    let mut state = powered(&topology);
    assert!(state.read_node(Q));
    assert!(!state.read_node(QB));

    state.set_node(R, true);
    assert!(!state.read_node(Q));
    state.set_node(R, false);
    assert!(!state.read_node(Q));
    assert!(state.read_node(QB));

    state.set_node(S, true);
    assert!(state.read_node(Q));
    assert!(!state.read_node(QB));
    state.set_node(S, false);
    assert!(state.read_node(Q));
    assert!(!state.read_node(QB));

    assert_eq!(state.stats().truncated, 0);
}

#[test]
fn both_inputs_high_pull_both_outputs_low()
{
    let topology = sr_latch();
    let mut state = powered(&topology);
    state.write_nodes(&[S, R], 0b11);
    assert!(!state.read_node(Q));
    assert!(!state.read_node(QB));
    assert_eq!(state.read_nodes(&[Q, QB, S, R]), 0b1100);
}

#[test]
fn topology_is_shareable()
{
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Topology>();
    assert_send_sync::<State>();
}

#[test]
fn chips_on_separate_threads_agree()
{
    let topology = sr_latch();
    let pattern: Vec<(Node, bool)> = (0..64)
        .map(|i| (if i % 3 == 0 { S } else { R }, (i * 7) % 5 < 2))
        .collect();

    let results = crossbeam::scope(|s|
    {
        let handles: Vec<_> = (0..4)
            .map(|_|
            {
                let topology = Arc::clone(&topology);
                let pattern = &pattern;
                s.spawn(move |_|
                {
                    let mut state = powered(&topology);
                    let mut trace = Vec::new();
                    for &(node, v) in pattern
                    {
                        state.set_node(node, v);
                        trace.push(state.read_nodes(&[Q, QB]));
                    }
                    (trace, state.bits().node_value.clone())
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect::<Vec<_>>()
    })
    .unwrap();

    for result in &results[1..]
    {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(Arc::strong_count(&topology), 1);
}

#[test]
fn repeated_runs_are_identical()
{
    let topology = sr_latch();
    let run = ||
    {
        let mut state = powered(&topology);
        for (node, v) in [(R, true), (S, true), (R, false), (S, false), (S, true)]
        {
            state.set_node(node, v);
        }
        (state.bits().node_value.clone(), state.bits().tran_is_on.clone(), state.stats())
    };
    assert_eq!(run(), run());
}
