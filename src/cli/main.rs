use std::io::BufReader;

use clap::Parser;
use marten_sat::{context::Context, reports::Report, types::err::ErrorKind};

mod args;
use args::Args;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    let mut ctx = Context::from_config(config);

    println!("c Reading DIMACS file from {:?}", args.formula_file);
    if let Err(e) = read(&mut ctx, &args) {
        println!("c Parse error: {e:?}");
        std::process::exit(1);
    }

    let report = match ctx.solve_given(Vec::default(), args.conflict_budget) {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    if args.stats {
        print_stats(&ctx);
    }

    println!("s {}", dimacs_status(report));

    if report == Report::Satisfiable && args.model {
        let literals = ctx
            .model()
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                value.map(|v| match v {
                    true => format!("{}", index + 1),
                    false => format!("-{}", index + 1),
                })
            })
            .collect::<Vec<_>>();
        println!("v {} 0", literals.join(" "));
    }

    if let Some(path) = &args.dump_learnts {
        let written = std::fs::File::create(path)
            .and_then(|mut file| ctx.dump_learnts(&mut file, args.dump_max_size));
        if let Err(e) = written {
            println!("c Failed to write learnt clauses: {e}");
            std::process::exit(1);
        }
    }
}

/// Reads the formula file of `args` into `ctx`, decompressing if the file has an `xz` extension.
fn read(ctx: &mut Context, args: &Args) -> Result<(), ErrorKind> {
    let file = match std::fs::File::open(&args.formula_file) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let info = match args.formula_file.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            ctx.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))?
        }

        _ => ctx.read_dimacs(BufReader::new(&file))?,
    };

    match info.expected_atoms {
        Some(count) => println!("c Expected {count} atoms."),
        None => println!("c No preamble was found."),
    }
    println!("c Added    {} clauses and {} XOR constraints.", info.clauses, info.xors);

    Ok(())
}

fn dimacs_status(report: Report) -> &'static str {
    match report {
        Report::Satisfiable => "SATISFIABLE",
        Report::Unsatisfiable => "UNSATISFIABLE",
        Report::ResourceLimit | Report::Unknown => "UNKNOWN",
    }
}

fn print_stats(ctx: &Context) {
    let counters = &ctx.counters;
    println!("c conflicts:     {}", counters.total_conflicts);
    println!("c decisions:     {}", counters.total_decisions);
    println!("c propagations:  {}", counters.total_propagations);
    println!("c restarts:      {}", counters.restarts);
    println!("c reductions:    {}", counters.reductions);
    println!("c episodes:      {}", counters.episodes);
    println!("c time:          {:.2?}", counters.time);
    println!("c replaced:      {}", ctx.replaced_atom_count());
    println!("c eliminated:    {}", ctx.eliminated_clause_count());
    for stats in ctx.simplification_stats() {
        println!(
            "c {:<16} calls {:>6} clauses {:>8} atoms {:>8} units {:>8} time {:.2?}",
            stats.name, stats.calls, stats.eliminated_clauses, stats.replaced_atoms, stats.units, stats.time
        );
    }
    println!("{}", ctx.snapshot());
}
