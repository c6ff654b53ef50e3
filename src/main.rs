use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::io::BufReader;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use wildcard_unroll::models::parse_ipv4;
use wildcard_unroll::{input, output, unroll_all, Config, Unrolled};

/// Unroll discontiguous IPv4 wildcard masks into hosts or subnets
#[derive(Debug, Parser)]
#[command(version)]
struct Opt {
    #[command(subcommand)]
    command: Cmds,
}

#[derive(Debug, Subcommand)]
enum Cmds {
    /// Unroll a single address and wildcard mask
    Unroll {
        /// Base address, e.g. 10.0.1.64
        #[arg(short, long)]
        address: String,
        /// Wildcard mask, e.g. 255.0.7.224
        #[arg(short, long)]
        mask: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Unroll every address/mask pair in a file (stdin when omitted)
    Batch {
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Show the bit ranges of a wildcard mask
    Explain {
        #[arg(short, long)]
        mask: String,
    },
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Refuse to enumerate more than this many wildcard bits (0-32)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=32))]
    max_width: Option<u32>,
    /// Sort results by address
    #[arg(long)]
    sort: bool,
    /// Print JSON instead of a listing
    #[arg(long)]
    json: bool,
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let opt = Opt::parse();
    if let Err(e) = run(opt) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    if let Some(path) = config.log_config_path() {
        if let Err(e) = log4rs::init_file(path, Default::default()) {
            eprintln!("Logging disabled, {path}: {e}");
        }
    }
    log::info!("#Start main() {:?}", opt.command);

    match opt.command {
        Cmds::Unroll { address, mask, out } => {
            let pair = (parse_ipv4("address", &address)?, parse_ipv4("mask", &mask)?);
            report(&[pair], &out, &config)?;
        }
        Cmds::Batch { file, out } => {
            let pairs = match file {
                Some(path) => input::read_wildcard_file(path)?,
                None => input::read_wildcards(BufReader::new(std::io::stdin().lock()))?,
            };
            report(&pairs, &out, &config)?;
        }
        Cmds::Explain { mask } => output::print_explain(parse_ipv4("mask", &mask)?),
    }

    Ok(())
}

fn report(
    pairs: &[(Ipv4Addr, Ipv4Addr)],
    out: &OutputArgs,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let config = config.clone().with_max_width(out.max_width)?;
    let unrolled: Vec<Unrolled> = unroll_all(pairs, config.max_width, out.sort)?;

    if out.json {
        output::print_json(&unrolled)?;
    } else {
        for u in &unrolled {
            output::print_unrolled(u, config.print_limit);
        }
    }
    Ok(())
}
