//! `tintboard palettes`: list the preset catalog.

use anyhow::Result;
use tint_core::{Region, presets};

use crate::output;

pub fn handle() -> Result<()> {
    let catalog = presets();
    if !output::is_text() {
        output::data("palettes", &catalog);
        return Ok(());
    }

    output::header("Preset Palettes");
    let mut table = output::table();
    let mut columns = vec!["#", "Name"];
    columns.extend(Region::ALL.iter().map(|r| r.label()));
    output::table_header(&mut table, &columns);

    for (i, palette) in catalog.iter().enumerate() {
        let mut row = vec![
            comfy_table::Cell::new(i + 1),
            comfy_table::Cell::new(&palette.name).fg(comfy_table::Color::Green),
        ];
        row.extend(
            Region::ALL
                .iter()
                .map(|r| output::color_cell(palette.hex_for(*r), palette.color_for(*r))),
        );
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}
