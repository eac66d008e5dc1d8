//! Utility functions for rendering field tables

/// Renders bytes as `0x..U, ` hexadecimal literals, `per_row` to a line.
///
/// The output pastes directly into a constant array definition.
pub fn render_hex_rows(values: &[u8], per_row: usize) -> String {
    let mut out = String::with_capacity(values.len() * 7);
    for row in values.chunks(per_row.max(1)) {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("0x{value:X}U,"));
        }
        out.push('\n');
    }
    out
}
