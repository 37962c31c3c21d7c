//! End-to-end checks against the real 6502 netlist.
//!
//! The dataset is not shipped with the crate. Point `TRANSIM6502_NETLIST` at
//! a JSON netlist to run these; without it they return immediately.

use std::sync::Arc;
use transim6502::cpu6502::{ self, Cpu6502, Pin };
use transim6502::{ Netlist, Topology };

fn topology() -> Option<Arc<Topology>>
{
    let path = match std::env::var_os("TRANSIM6502_NETLIST")
    {
        Some(path) => path,
        None =>
        {
            eprintln!("TRANSIM6502_NETLIST not set, skipping");
            return None;
        }
    };
    let netlist = Netlist::load(path).expect("netlist loads");
    cpu6502::check_netlist(&netlist).expect("netlist matches the 6502 labels");
    Some(Arc::new(Topology::from_netlist(&netlist)))
}

/// Reset vector at 0xe000, and NOPs everywhere else.
fn nop_memory() -> Vec<u8>
{
    let mut memory = vec![0xeau8; 0x10000];
    memory[0xfffc] = 0x00;
    memory[0xfffd] = 0xe0;
    memory
}

#[test]
fn power_on_is_stable()
{
    let Some(topology) = topology() else { return };
    let mut cpu = Cpu6502::new(topology);
    let before = cpu.state().bits().node_value.clone();
    let rounds = cpu.stats().rounds;

    cpu.eval();
    assert_eq!(cpu.state().bits().node_value, before);
    assert_eq!(cpu.stats().rounds, rounds);
}

#[test]
fn data_bus_round_trip()
{
    let Some(topology) = topology() else { return };
    let mut cpu = Cpu6502::new(topology);
    for value in 0..=0xffu8
    {
        cpu.write_data(value);
        assert_eq!(cpu.read_data(), value);
    }
}

/// RES is sampled within a cycle of its release. The 6502 then spends seven
/// clock cycles on its reset sequence, the last two reading 0xfffc and
/// 0xfffd, and fetches the first opcode on the next one.
const RESET_SEQUENCE_HALF_CYCLES: u64 = 20;

#[test]
fn reset_fetches_the_vector()
{
    let Some(topology) = topology() else { return };
    let mut memory = nop_memory();
    let mut cpu = Cpu6502::new(topology);
    cpu.reset(&mut memory);
    assert_eq!(cpu.read_pin(Pin::Reset), 1);
    assert_eq!(cpu.half_cycles(), 0);

    let mut low_read_at = None;
    let mut high_read_at = None;
    let mut landed_at = None;
    while cpu.half_cycles() < RESET_SEQUENCE_HALF_CYCLES
    {
        cpu.half_cycle_step(&mut memory);
        let now = cpu.half_cycles();
        match cpu.read_addr()
        {
            0xfffc => { low_read_at.get_or_insert(now); }
            0xfffd => { high_read_at.get_or_insert(now); }
            _ => {}
        }
        if high_read_at.is_some() && cpu.read_pc() == 0xe000
        {
            landed_at = Some(now);
            break;
        }
    }

    let low = low_read_at.unwrap_or_else(|| panic!("0xfffc was never read: {}", cpu.status()));
    let high = high_read_at.unwrap_or_else(|| panic!("0xfffd was never read: {}", cpu.status()));
    let landed = landed_at.unwrap_or_else(|| panic!("PC never reached the vector: {}", cpu.status()));

    // one bus cycle per vector byte, then the opcode fetch
    assert_eq!(high, low + 2, "vector bytes not on consecutive cycles");
    assert!(landed >= high && landed <= high + 4, "PC landed at half-cycle {} after 0xfffd at {}", landed, high);
    assert!(landed <= RESET_SEQUENCE_HALF_CYCLES);
}

#[test]
fn runs_are_deterministic()
{
    let Some(topology) = topology() else { return };

    let run = ||
    {
        let mut memory = nop_memory();
        let mut cpu = Cpu6502::new(Arc::clone(&topology));
        cpu.reset(&mut memory);
        let mut trace = Vec::new();
        for _ in 0..100
        {
            cpu.half_cycle_step(&mut memory);
            trace.push(cpu.status());
        }
        trace
    };

    assert_eq!(run(), run());
}
