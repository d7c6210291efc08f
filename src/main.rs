fn main() -> anyhow::Result<()> {
    openhours::cli::run()
}
