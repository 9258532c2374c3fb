use wayfind_core::config::Algorithm;

/// Parse a search algorithm name
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
