use clap::Parser;

use shape_guard::cli::{Cli, Commands};
use shape_guard::commands::{run_check, run_init, run_rules};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
    };

    std::process::exit(exit_code);
}
