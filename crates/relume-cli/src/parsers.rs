//! Argument parsing helpers

/// Parse a `ROWSxCOLS` tile grid argument, e.g. `16x32`.
pub fn parse_tile_grid(value: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = value.split(['x', 'X']).collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid tile grid '{}': expected ROWSxCOLS, e.g. 16x32",
            value
        ));
    }

    let rows: u32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid tile rows '{}'", parts[0]))?;
    let cols: u32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid tile columns '{}'", parts[1]))?;

    if rows == 0 || cols == 0 {
        return Err("Tile grid dimensions must be at least 1x1".to_string());
    }

    Ok((rows, cols))
}
