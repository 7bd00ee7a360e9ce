use strsim::normalized_levenshtein;

/// Minimum title similarity for an external hit to count as the same book
pub const TITLE_MATCH_THRESHOLD: f64 = 0.6;

/// Whether `found_title` from an external source plausibly is `search_title`.
///
/// Accepts either a close edit distance or the search being contained in the
/// found title ("dune" vs "Dune Messiah").
pub fn is_valid_book_match(search_title: &str, found_title: &str) -> bool {
    let search = search_title.to_lowercase();
    let found = found_title.to_lowercase();

    let similarity = normalized_levenshtein(&search, &found);
    similarity >= TITLE_MATCH_THRESHOLD || found.contains(&search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_case_insensitive_titles_match() {
        assert!(is_valid_book_match("Dune", "dune"));
    }

    #[test]
    fn small_typos_match() {
        assert!(is_valid_book_match("the hobitt", "The Hobbit"));
    }

    #[test]
    fn substring_matches_even_when_distance_is_large() {
        assert!(is_valid_book_match("dune", "Dune: The Graphic Novel, Book 1"));
    }

    #[test]
    fn unrelated_titles_do_not_match() {
        assert!(!is_valid_book_match("dune", "Pride and Prejudice"));
    }
}
