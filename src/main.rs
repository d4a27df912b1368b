mod cli;
mod demo;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("application error: {err}");
        // 2: applicant data rejected, 1: environment or io failure.
        let code = if err.is_bad_input() { 2 } else { 1 };
        std::process::exit(code);
    }
}
