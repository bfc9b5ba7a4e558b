use anyhow::bail;
use anyhow::Result;
use log::debug;
use serde::Deserialize;
use serde::Serialize;

use crate::err::Error;
use crate::printer::{LineWidth, DEFAULT_WIDTH};
use crate::ranges::{self, CharRange};

pub const USAGE: &str = "usage: unidump [-w CHARS] [RANGE]...

Dump unicode chars to the terminal, wrapped for copy-paste.

RANGE is inclusive hex code points, like 2580-259F or U+1FB00-U+1FBFF,
or a single point like 41. With no ranges, dumps the block drawing sets.

  -w, --width CHARS   chars per line before a break (default 40)
      --print-config  show the effective options as json, and exit
  -h, --help          this

Also read from the environment: UNIDUMP_WIDTH, UNIDUMP_RANGES.
";

/// What the user asked for, before validation. `ranges` stays in the comma
/// separated spec format, so the env and argv forms are identical.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Options {
    pub width: Option<i64>,
    pub ranges: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Cli {
    pub options: Options,
    pub print_config: bool,
    pub help: bool,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Cli> {
    let mut cli = Cli::default();
    let mut positional = Vec::with_capacity(4);
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-w" | "--width" => {
                let value = args.next().ok_or_else(|| {
                    Error::InvalidConfiguration(format!("{arg} wants a value"))
                })?;
                cli.options.width = Some(value.parse().map_err(|_| {
                    Error::InvalidConfiguration(format!("unparseable width: {value:?}"))
                })?);
            }
            "--print-config" => cli.print_config = true,
            "-h" | "--help" => cli.help = true,
            flag if flag.starts_with('-') => {
                bail!("unrecognised argument {flag:?}\n\n{USAGE}")
            }
            _ => positional.push(arg),
        }
    }

    if !positional.is_empty() {
        cli.options.ranges = Some(positional.join(","));
    }

    Ok(cli)
}

/// Defaults, under the environment, under the command line.
pub fn load(cli: &Cli) -> Result<Options> {
    let mut options: Options = config::Config::builder()
        .add_source(config::Environment::with_prefix("UNIDUMP"))
        .build()?
        .try_deserialize()?;

    debug!("environment options: {:?}", options);

    if let Some(width) = cli.options.width {
        options.width = Some(width);
    }
    if let Some(ranges) = &cli.options.ranges {
        options.ranges = Some(ranges.clone());
    }

    Ok(options)
}

impl Options {
    pub fn resolve(&self) -> Result<(Vec<CharRange>, LineWidth), Error> {
        let width = LineWidth::new(self.width.unwrap_or(DEFAULT_WIDTH))?;
        let ranges = match &self.ranges {
            Some(spec) => ranges::parse_range_list(spec)?,
            None => ranges::default_ranges(),
        };

        Ok((ranges, width))
    }
}
