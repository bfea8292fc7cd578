pub fn run(title: &str) -> emx_manuscript::Result<()> {
    println!("{}", emx_manuscript::sanitize_to_filename(title));
    Ok(())
}
