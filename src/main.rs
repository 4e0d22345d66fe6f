use clap::Parser;
use log::{error, info};
use pdf_batch_renamer::cli::Args;

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    info!("PDF batch renamer starting...");

    match pdf_batch_renamer::run(&args) {
        Ok(report) => {
            if let Some(summary) = report.counters.summary_line() {
                println!("----------------------------------");
                println!("{summary}");
                println!("----------------------------------");
            }
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
