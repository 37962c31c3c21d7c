use clap::Parser;
use log::{ error, info, warn };
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use transim6502::cpu6502::{ self, ChipStatus, Cpu6502 };
use transim6502::{ Netlist, SimConfig, Topology, DEFAULT_MAX_ROUNDS };

#[derive(clap::Parser, Debug)]
#[command(name = "transim6502")]
#[command(about = "Run a program on a transistor-level 6502")]
struct Args
{
    /// Netlist JSON: { vss, vcc, pullup, transdefs }.
    #[clap(long)]
    netlist: PathBuf,

    /// Binary image to place in memory.
    #[clap(long)]
    rom: Option<PathBuf>,

    /// Where the image is loaded.
    #[clap(long, default_value = "0x0000", value_parser = parse_u16)]
    load_addr: u16,

    /// Overrides the reset vector at 0xfffc.
    #[clap(long, value_parser = parse_u16)]
    reset_vector: Option<u16>,

    /// Half-cycles to run after reset.
    #[clap(long, default_value = "200")]
    half_cycles: u64,

    /// Propagation rounds per evaluation.
    #[clap(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Power on with SO high.
    #[clap(long)]
    so_high: bool,

    /// Print status every N half-cycles (0: only at the end).
    #[clap(long, default_value = "0")]
    status_every: u64,

    /// Run this many chips in parallel on one shared topology and check
    /// that they end in the same state.
    #[clap(long, default_value = "1")]
    instances: usize,
}

fn parse_u16(s: &str) -> Result<u16, String>
{
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("$"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("{}: {}", s, e))
}

fn load_memory(args: &Args) -> Result<Vec<u8>, Box<dyn Error>>
{
    let mut memory = vec![0u8; 0x10000];

    if let Some(rom) = &args.rom
    {
        let image = fs::read(rom)?;
        let start = args.load_addr as usize;
        let len = image.len().min(memory.len() - start);
        if len < image.len()
        {
            warn!("{} is {} bytes, only {} fit at {:04x}", rom.display(), image.len(), len, start);
        }
        memory[start..start + len].copy_from_slice(&image[..len]);
        info!("loaded {} bytes at {:04x}", len, start);
    }

    if let Some(vector) = args.reset_vector
    {
        memory[0xfffc] = vector as u8;
        memory[0xfffd] = (vector >> 8) as u8;
    }

    Ok(memory)
}

fn run_chip(topology: Arc<Topology>, config: SimConfig, mut memory: Vec<u8>, args: &Args, report: bool) -> ChipStatus
{
    let mut cpu = Cpu6502::with_config(topology, config);
    cpu.reset(&mut memory);

    let n = Instant::now();
    for _ in 0..args.half_cycles
    {
        cpu.half_cycle_step(&mut memory);

        if report && args.status_every != 0 && cpu.half_cycles() % args.status_every == 0
        {
            info!("{}", cpu.status());
        }
    }

    if report
    {
        let time = n.elapsed().as_secs_f64();
        let stats = cpu.stats();
        info!(
            "ran {} half-cycles in {:.3}s: {:.1} Hz, {} evals, {} rounds, {} truncated",
            args.half_cycles,
            time,
            args.half_cycles as f64 / 2.0 / time.max(f64::EPSILON),
            stats.evals,
            stats.rounds,
            stats.truncated
        );
    }

    cpu.status()
}

fn run(args: &Args) -> Result<(), Box<dyn Error>>
{
    let n = Instant::now();
    let netlist = Netlist::load(&args.netlist)?;
    cpu6502::check_netlist(&netlist)?;
    let topology = Arc::new(Topology::from_netlist(&netlist));
    info!(
        "netlist loaded: {} nodes, {} transistors. Took {:?}",
        topology.nodes_count(),
        topology.transistors_count(),
        n.elapsed()
    );

    let memory = load_memory(args)?;
    let config = SimConfig { max_rounds: args.max_rounds, so_level: args.so_high };

    if args.instances <= 1
    {
        let status = run_chip(topology, config, memory, args, true);
        println!("{}", status);
        return Ok(());
    }

    let statuses = crossbeam::scope(|s|
    {
        let handles: Vec<_> = (0..args.instances)
            .map(|i|
            {
                let topology = Arc::clone(&topology);
                let memory = memory.clone();
                s.spawn(move |_| run_chip(topology, config, memory, args, i == 0))
            })
            .collect();

        handles.into_iter().map(|h| h.join()).collect::<Vec<_>>()
    })
    .map_err(|_| "simulation thread panicked")?;

    let statuses = statuses
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| "simulation thread panicked")?;

    let first = statuses[0];
    for (i, status) in statuses.iter().enumerate().skip(1)
    {
        if *status != first
        {
            return Err(format!("instance {} diverged:\n  {}\n  {}", i, first, status).into());
        }
    }

    info!("{} instances agree", statuses.len());
    println!("{}", first);
    Ok(())
}

fn main() -> ExitCode
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args)
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) =>
        {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
