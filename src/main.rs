use std::process;
use std::time::Instant;

use log::info;

use u_chain::evaluation::evaluate_chain;
use u_chain::io::{export_ids, load_bookings};
use u_chain::options::ChainOptions;
use u_chain::{logging, Error, Result};

fn main() {
    let options = match ChainOptions::from_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\n\n{}", ChainOptions::usage());
            process::exit(2);
        }
    };

    if options.help {
        println!("{}", ChainOptions::usage());
        return;
    }

    if let Err(e) = run(&options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(options: &ChainOptions) -> Result<()> {
    let now = Instant::now();
    logging::init_logger(options)?;

    let file = options
        .file
        .as_ref()
        .ok_or_else(|| Error::invalid_argument("missing required option --file"))?;
    let bookings = load_bookings(file)?;
    info!("input: file={} n={}", file.display(), bookings.len());

    let best = options.search().run(&bookings)?;
    let report = evaluate_chain(&bookings, best.chain())?;

    let remainder: Vec<String> = report.relocations().iter().map(|id| id.to_string()).collect();
    info!(
        "output: chain={} relocations={} remainder=[{}] time={:.2}s",
        report.chain_len(),
        report.num_relocations(),
        remainder.join(", "),
        now.elapsed().as_secs_f32()
    );

    export_ids(best.chain(), &options.output)?;
    info!("output: wrote {}", options.output.display());

    Ok(())
}
