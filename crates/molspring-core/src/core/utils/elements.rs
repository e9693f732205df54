use phf::{Map, phf_map};

/// Node display sizes of the reference renderer, keyed by element symbol.
static ELEMENT_DISPLAY_SIZES: Map<&'static str, u32> = phf_map! {
    "H" => 8,
    "O" => 10,
    "N" => 12,
    "C" => 16,
};

/// Display size for elements without a dedicated entry.
pub const DEFAULT_DISPLAY_SIZE: u32 = 10;

/// Derives an element symbol from an atom name: the first character, uppercased.
/// An empty name yields an empty symbol.
pub fn element_symbol(atom_name: &str) -> String {
    atom_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default()
}

/// Returns the renderer display size for an element symbol.
pub fn display_size(element: &str) -> u32 {
    *ELEMENT_DISPLAY_SIZES
        .get(element.trim())
        .unwrap_or(&DEFAULT_DISPLAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_symbol_takes_the_first_character_uppercased() {
        assert_eq!(element_symbol("C12"), "C");
        assert_eq!(element_symbol("o3"), "O");
        assert_eq!(element_symbol("N"), "N");
        assert_eq!(element_symbol("h17"), "H");
    }

    #[test]
    fn element_symbol_trims_whitespace() {
        assert_eq!(element_symbol(" C1 "), "C");
    }

    #[test]
    fn element_symbol_of_empty_name_is_empty() {
        assert_eq!(element_symbol(""), "");
        assert_eq!(element_symbol("   "), "");
    }

    #[test]
    fn display_size_knows_the_reference_elements() {
        assert_eq!(display_size("H"), 8);
        assert_eq!(display_size("O"), 10);
        assert_eq!(display_size("N"), 12);
        assert_eq!(display_size("C"), 16);
    }

    #[test]
    fn display_size_falls_back_for_unknown_elements() {
        assert_eq!(display_size("S"), DEFAULT_DISPLAY_SIZE);
        assert_eq!(display_size(""), DEFAULT_DISPLAY_SIZE);
        assert_eq!(display_size("Xx"), DEFAULT_DISPLAY_SIZE);
    }

    #[test]
    fn display_size_trims_whitespace() {
        assert_eq!(display_size(" C "), 16);
    }
}
