mod cli;
mod convert;
mod error;
mod fmt;
mod ledger;
mod models;
mod rates;
mod settings;
mod store;
mod tracker;

use clap::Parser;

use cli::{BudgetCommands, Cli, Commands, ExpenseCommands, RatesCommands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Convert { amount, from, to } => cli::convert::run(&amount, &from, &to),
        Commands::Budget { command } => match command {
            BudgetCommands::Set { amount } => cli::budget::set(&amount),
            BudgetCommands::Add {
                amount,
                currency,
                desc,
            } => cli::budget::add(&amount, &currency, &desc),
            BudgetCommands::Update { id, field, value } => cli::budget::update(id, &field, &value),
            BudgetCommands::Delete { id } => cli::budget::delete(id),
            BudgetCommands::Show => cli::budget::show(),
        },
        Commands::Expense { command } => match command {
            ExpenseCommands::Add {
                amount,
                currency,
                desc,
            } => cli::expense::add(&amount, &currency, &desc),
            ExpenseCommands::Show => cli::expense::show(),
        },
        Commands::Rates { command } => match command {
            RatesCommands::Fetch { url } => cli::rates::fetch(url),
            RatesCommands::Set { code, rate } => cli::rates::set(&code, &rate),
            RatesCommands::List => cli::rates::list(),
        },
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
