fn main() -> Result<(), serde_json::Error> {
    let table = swatches::parse_table(swatches::LANGUAGE_COLORS_JSON)?;
    print!("{}", swatches::render_sheet(&table));
    Ok(())
}
