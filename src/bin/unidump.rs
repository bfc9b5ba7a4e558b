use std::env;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::new().parse_default_env().init();

    unidump::run(env::args().skip(1))
}
