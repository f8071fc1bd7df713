use labellift::cli::run;

fn main() -> anyhow::Result<()> {
    run()
}
