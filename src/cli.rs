use crate::demo::{run_demo, run_loan, run_score, LoanArgs, ScoreArgs};
use applicant_scoring::config::AppConfig;
use applicant_scoring::error::AppError;
use applicant_scoring::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "applicant-scoring",
    about = "Score applicant records and audit outcomes from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a JSON applicant record (default weights unless overridden)
    Score(ScoreArgs),
    /// Evaluate a loan application against the default financial criteria
    Loan(LoanArgs),
    /// Score the reference applicants and run the identity parity audit (default command)
    Demo,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Score(args) => run_score(args, &config),
        Command::Loan(args) => run_loan(args),
        Command::Demo => run_demo(&config),
    }
}
