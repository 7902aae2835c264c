use std::io;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nulbuf_demo")]
#[command(about = "Run the nulbuf demos by name", long_about = None)]
struct Args {
    /// List the available demos
    #[arg(short, long, default_value_t = false)]
    list: bool,

    /// Demo to run
    demo: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "nulbuf_demo".into());

    let status = nulbuf_demo::dispatch(
        args.list,
        args.demo.as_deref(),
        &program,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}
