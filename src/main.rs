mod cli;
mod cli_help;
mod popcon;
mod rate;
mod rating;
mod report_helpers;
mod reviews;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Popcon { common, sort_by } => {
            if let Err(err) = popcon::run(common.file.as_deref(), common.json, common.top, &sort_by)
            {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Commands::Reviews { common, sort_by } => {
            if let Err(err) =
                reviews::run(common.file.as_deref(), common.json, common.top, &sort_by)
            {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Commands::Rate { histogram, json } => {
            if let Err(err) = rate::run(&histogram, json) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pop", &mut std::io::stdout());
        }
    }
}
