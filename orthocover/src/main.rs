use std::io::{self, Write};

use clap::Parser;
use orthocover::{run, Args, Error};

fn main() -> Result<(), Error> {
    env_logger::builder()
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{ts}: {style}{}{style:#}: {}",
                record.level(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush().map_err(Error::StdioWriteFail)
}
