use std::process::ExitCode;

use thor::core::cli::{parse_invocation, usage, usage_exit_code, Invocation};
use thor::core::logging::start_logger;
use thor::core::report::write_report;
use thor::models::args::Args;
use thor::RunConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_invocation(std::env::args_os()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Usage) => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let code = usage_exit_code(&e);
            if code == 0 {
                let _ = e.print();
            } else {
                println!("{}", usage());
                eprint!("{}", e);
            }
            return ExitCode::from(code);
        }
    };
    if let Err(e) = start_logger(args.log_level) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let config = RunConfig::try_from(args)?;
    let result = thor::run(&config).await?;
    if let Some(path) = &args.report {
        write_report(path, &config, &result)?;
    }
    Ok(())
}
