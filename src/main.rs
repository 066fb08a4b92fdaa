fn main() -> miette::Result<()> {
    preflight::cli::run()
}
