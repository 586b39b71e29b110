//! Text normalization for sheet headers and free-text list cells.
//!
//! Sheet editors type headers like `" Publication Date"` and author lists like
//! `"Alice Smith, Bob Jones;\nCarol White"`. The helpers here turn those into
//! stable JSON keys and ordered string lists:
//! - Header names: trim, spaces to underscores, lowercase
//! - Author lists: comma/semicolon separated, line breaks folded into spaces
//! - People lists: whitespace separated handles

/// Normalize a sheet header into a JSON key.
///
/// Transformations applied, in order:
/// 1. Strip leading/trailing whitespace
/// 2. Replace every space with `_` (runs of spaces are not collapsed)
/// 3. Convert to lowercase
///
/// # Examples
///
/// ```
/// use sheet_sync::utils::normalize_column_name;
///
/// assert_eq!(normalize_column_name("Publication Date"), "publication_date");
/// assert_eq!(normalize_column_name("  URL "), "url");
/// assert_eq!(normalize_column_name("Paper  Title"), "paper__title");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_lowercase()
}

/// Split a free-text author cell into an ordered list of names.
///
/// The whole cell is trimmed, `\n` and `\r` become spaces, commas are treated
/// as semicolons, and every piece between semicolons is trimmed. Empty pieces
/// produced by consecutive separators are kept.
///
/// # Examples
///
/// ```
/// use sheet_sync::utils::split_authors;
///
/// assert_eq!(split_authors("A, B; C"), vec!["A", "B", "C"]);
/// assert_eq!(split_authors("Alice Smith,\nBob Jones"), vec!["Alice Smith", "Bob Jones"]);
/// assert_eq!(split_authors("A;;B"), vec!["A", "", "B"]);
/// ```
pub fn split_authors(cell: &str) -> Vec<String> {
    cell.trim()
        .replace(['\n', '\r'], " ")
        .replace(',', ";")
        .split(';')
        .map(|piece| piece.trim().to_string())
        .collect()
}

/// Split a free-text people cell into tokens on runs of whitespace.
///
/// # Examples
///
/// ```
/// use sheet_sync::utils::split_people;
///
/// assert_eq!(split_people("alice bob  carol"), vec!["alice", "bob", "carol"]);
/// assert!(split_people("   ").is_empty());
/// ```
pub fn split_people(cell: &str) -> Vec<String> {
    cell.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize_column_name("Title"), "title");
        assert_eq!(normalize_column_name("URL"), "url");
        assert_eq!(normalize_column_name("  Notes  "), "notes");
    }

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize_column_name("Publication Date"), "publication_date");
        assert_eq!(normalize_column_name("Paper Title"), "paper_title");
        assert_eq!(normalize_column_name("A  B"), "a__b");
    }

    #[test]
    fn test_normalize_leaves_tabs_inside() {
        // only the ends are stripped of general whitespace
        assert_eq!(normalize_column_name("\tResearch\tArea\n"), "research\tarea");
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize_column_name("Éditeur Principal"), "éditeur_principal");
    }

    #[test]
    fn test_split_authors_mixed_separators() {
        assert_eq!(split_authors("A, B; C"), vec!["A", "B", "C"]);
        assert_eq!(
            split_authors("  Alice Smith ;Bob Jones,  Carol White  "),
            vec!["Alice Smith", "Bob Jones", "Carol White"]
        );
    }

    #[test]
    fn test_split_authors_line_breaks_become_spaces() {
        // a line break inside a piece is folded, not treated as a separator
        assert_eq!(split_authors("A, B; C\nD"), vec!["A", "B", "C D"]);
        assert_eq!(split_authors("Alice,\r\nBob"), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_split_authors_keeps_empty_pieces() {
        assert_eq!(split_authors("A,,B"), vec!["A", "", "B"]);
        assert_eq!(split_authors("A;"), vec!["A", ""]);
    }

    #[test]
    fn test_split_authors_single() {
        assert_eq!(split_authors("Ada Lovelace"), vec!["Ada Lovelace"]);
    }

    #[test]
    fn test_split_people() {
        assert_eq!(split_people("alice bob  carol"), vec!["alice", "bob", "carol"]);
        assert_eq!(split_people(" alice\nbob\t"), vec!["alice", "bob"]);
        assert_eq!(split_people("a@example.org"), vec!["a@example.org"]);
    }
}
