pub mod labels;
pub mod pins;

use crate::error::{ NetlistError, Result };
use crate::memory::Memory;
use crate::netlist::Netlist;
use crate::sim::{ EvalStats, SimConfig, State };
use crate::topology::Topology;
use labels::*;
use log::debug;
use std::fmt;
use std::sync::Arc;

pub use pins::Pin;

/// Half-cycles RES is held low by `reset`.
pub const RESET_HALF_CYCLES: usize = 16;

/// Checks that a dataset can back a `Cpu6502`: valid indices, large enough
/// for every label, rails where the label table puts them.
pub fn check_netlist(netlist: &Netlist) -> Result<()>
{
    netlist.validate()?;

    if netlist.nodes_count() <= HIGHEST
    {
        return Err(NetlistError::TooSmall { nodes: netlist.nodes_count(), needed: HIGHEST + 1 });
    }

    for (rail, found, expected) in [("vss", netlist.vss, vss), ("vcc", netlist.vcc, vcc)]
    {
        if found != expected
        {
            return Err(NetlistError::RailMismatch { rail, found, expected });
        }
    }

    Ok(())
}

/// A transistor-level 6502.
#[derive(Debug, Clone)]
pub struct Cpu6502
{
    state: State,
    config: SimConfig,
    half_cycles: u64,
}

impl Cpu6502
{
    pub fn new(topology: Arc<Topology>) -> Cpu6502
    {
        Cpu6502::with_config(topology, SimConfig::default())
    }

    /// Powers the chip on: control inputs at their idle levels with RES
    /// held low, then the whole netlist settled once.
    ///
    /// Panics if `topology` was not built from a 6502 dataset; use
    /// `check_netlist` on loaded data.
    pub fn with_config(topology: Arc<Topology>, config: SimConfig) -> Cpu6502
    {
        assert!(
            topology.nodes_count() > HIGHEST,
            "topology has {} nodes, the 6502 labels need {}", topology.nodes_count(), HIGHEST + 1
        );
        assert_eq!(topology.vss(), vss, "vss is not where the 6502 labels expect it");
        assert_eq!(topology.vcc(), vcc, "vcc is not where the 6502 labels expect it");

        let mut cpu = Cpu6502 {
            state: State::new(topology, config.max_rounds),
            config,
            half_cycles: 0,
        };
        cpu.initialize();
        cpu
    }

    fn initialize(&mut self)
    {
        self.state.set_node(res, false);
        self.state.set_node(clk0, true);
        self.state.set_node(rdy, true);
        self.state.set_node(so, self.config.so_level);
        self.state.set_node(irq, true);
        self.state.set_node(nmi, true);

        self.state.stabilize_chip();

        debug!(
            "6502 powered on: {} nodes, {} transistors, {} transistors conducting",
            self.state.topology().nodes_count(),
            self.state.topology().transistors_count(),
            self.state.bits().tran_is_on.count_ones()
        );
    }

    /// Holds RES low for eight clock cycles, then releases it. The chip
    /// fetches the reset vector through `memory` over the following cycles.
    pub fn reset<M: Memory + ?Sized>(&mut self, memory: &mut M)
    {
        self.state.set_node(res, false);

        for _ in 0..RESET_HALF_CYCLES
        {
            self.half_cycle_step(memory);
        }

        self.state.set_node(res, true);
        self.state.eval();
        self.half_cycles = 0;

        debug!("6502 reset released, PC {:04x}", self.read_pc());
    }

    /// Inverts the clock input and settles the chip. When the clock has just
    /// gone high the bus is serviced: a read puts `memory[address]` on the
    /// data bus, a write stores the data bus into `memory[address]`.
    pub fn half_cycle_step<M: Memory + ?Sized>(&mut self, memory: &mut M)
    {
        let clk = self.state.read_node(clk0);

        self.state.set_node(clk0, !clk);
        self.state.eval();

        if !clk
        {
            self.handle_memory(memory);
        }

        self.half_cycles += 1;
    }

    fn handle_memory<M: Memory + ?Sized>(&mut self, memory: &mut M)
    {
        let addr = self.read_addr();
        if self.read_rw()
        {
            let data = memory.read(addr);
            self.write_data(data);
        }
        else
        {
            let data = self.read_data();
            memory.write(addr, data);
        }
    }

    #[inline]
    pub fn eval(&mut self)
    {
        self.state.eval();
    }

    pub fn read_pin(&self, pin: Pin) -> u16
    {
        self.state.read_nodes(pin.nodes()) ^ pin.inversion()
    }

    pub fn write_pin(&mut self, pin: Pin, value: u16)
    {
        self.state.write_nodes(pin.nodes(), (value ^ pin.inversion()) & pin.mask());
    }

    #[inline]
    pub fn state(&self) -> &State
    {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> SimConfig
    {
        self.config
    }

    #[inline]
    pub fn stats(&self) -> EvalStats
    {
        self.state.stats()
    }

    /// Half-cycles stepped since the last reset.
    #[inline]
    pub fn half_cycles(&self) -> u64
    {
        self.half_cycles
    }

    pub fn read_clk(&self) -> bool
    {
        self.state.read_node(clk0)
    }

    /// High while the chip reads from the bus.
    pub fn read_rw(&self) -> bool
    {
        self.state.read_node(rw)
    }

    pub fn read_sync(&self) -> bool
    {
        self.state.read_node(sync_)
    }

    pub fn read_addr(&self) -> u16
    {
        self.read_pin(Pin::AddressBus)
    }

    pub fn read_data(&self) -> u8
    {
        self.read_pin(Pin::DataBus) as u8
    }

    pub fn write_data(&mut self, value: u8)
    {
        self.write_pin(Pin::DataBus, value as u16);
    }

    pub fn read_a(&self) -> u8
    {
        self.read_pin(Pin::A) as u8
    }

    pub fn read_x(&self) -> u8
    {
        self.read_pin(Pin::X) as u8
    }

    pub fn read_y(&self) -> u8
    {
        self.read_pin(Pin::Y) as u8
    }

    pub fn read_s(&self) -> u8
    {
        self.read_pin(Pin::S) as u8
    }

    pub fn read_p(&self) -> u8
    {
        self.read_pin(Pin::P) as u8
    }

    pub fn read_pc(&self) -> u16
    {
        self.read_pin(Pin::Pc)
    }

    pub fn write_pc(&mut self, value: u16)
    {
        self.write_pin(Pin::Pc, value);
    }

    pub fn read_ir(&self) -> u8
    {
        self.read_pin(Pin::Ir) as u8
    }

    pub fn status(&self) -> ChipStatus
    {
        ChipStatus {
            half_cycle: self.half_cycles,
            clk: self.read_clk(),
            addr: self.read_addr(),
            data: self.read_data(),
            rw: self.read_rw(),
            pc: self.read_pc(),
            a: self.read_a(),
            x: self.read_x(),
            y: self.read_y(),
            s: self.read_s(),
            p: self.read_p(),
            ir: self.read_ir(),
        }
    }
}

/// Bus and register snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipStatus
{
    pub half_cycle: u64,
    pub clk: bool,
    pub addr: u16,
    pub data: u8,
    pub rw: bool,
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub s: u8,
    pub p: u8,
    pub ir: u8,
}

/// One status line. While the clock is high the bus access is appended:
/// ` R$AAAA=$DD` for a read, where the data bus holds the byte served from
/// memory, or ` W$AAAA=$DD` for a write.
impl fmt::Display for ChipStatus
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "halfcyc:{} phi0:{} AB:{:04X} D:{:02X} RnW:{} PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:02X} IR:{:02X}",
            self.half_cycle,
            self.clk as u8,
            self.addr,
            self.data,
            self.rw as u8,
            self.pc,
            self.a,
            self.x,
            self.y,
            self.s,
            self.p,
            self.ir
        )?;

        if self.clk
        {
            let access = if self.rw { 'R' } else { 'W' };
            write!(f, " {}${:04X}=${:02X}", access, self.addr, self.data)?;
        }

        Ok(())
    }
}
