use luhn_tester::cli::run_cli;

fn main() -> anyhow::Result<()> {
    run_cli()
}
