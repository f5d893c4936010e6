use popularity_mapper::MapperBuilder;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // No flags: stdin in, stdout out, diagnostics on stderr.
    MapperBuilder::new().build().run()?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("popularity_mapper error: {e}");
        // Non-zero only for stream failures; skipped records never get here.
        std::process::exit(1);
    }
}
