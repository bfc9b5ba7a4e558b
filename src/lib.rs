pub mod err;
pub mod options;
pub mod printer;
pub mod ranges;

use std::io;
use std::io::BufWriter;
use std::io::Write;

use anyhow::Result;
use log::debug;

pub use err::Error;

pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    let cli = options::parse_args(args)?;

    if cli.help {
        print!("{}", options::USAGE);
        return Ok(());
    }

    let options = options::load(&cli)?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    let (ranges, width) = options.resolve()?;
    for range in &ranges {
        debug!("dumping {range}: {} chars", range.count());
    }
    debug!("{} chars per line", width.get());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    printer::print_ranges(&mut out, &ranges, width)?;
    out.flush()?;

    Ok(())
}
