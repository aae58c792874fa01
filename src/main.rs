use anyhow::Result;

fn main() -> Result<()> {
    dltm_converter::cli::run()
}
