use std::process::ExitCode;

use clap::Parser;
use k8split::cli::SplitArgs;
use k8split::io::stdin_is_piped;
use k8split::{SplitError, Splitter};

fn run(args: &SplitArgs) -> Result<(), SplitError> {
    let source = args.resolve(stdin_is_piped())?;
    let provider = source.provider();
    let mut splitter = Splitter::new(args.options());
    splitter.run(provider.as_ref())?;
    Ok(())
}

#[cfg(feature = "miette")]
fn report(e: SplitError) {
    let diag = k8split::error::SplitDiagnostic::from(e);
    eprintln!("{:?}", miette::Report::new(diag));
}

#[cfg(not(feature = "miette"))]
fn report(e: SplitError) {
    eprintln!("k8split: error: {e}");
}

fn main() -> ExitCode {
    let args = SplitArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(e);
            ExitCode::from(1)
        }
    }
}
