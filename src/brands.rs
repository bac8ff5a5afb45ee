use std::collections::HashSet;
use std::sync::OnceLock;

/// Canonical brand labels. Order matters: resolution returns the first hit.
pub const BRANDS: &[&str] = &[
    "Monte Cristo",
    "Cohiba",
    "Padron",
    "Arturo Fuente",
    "Romeo y Julieta",
    "Hoyo de Monterrey",
    "Partagas",
    "H. Upmann",
    "Oliva",
    "Rocky Patel",
    "Drew Estate",
    "Liga Privada",
    "My Father",
    "Perdomo",
    "Camacho",
    "Gurkha",
    "Alec Bradley",
    "Crowned Heads",
    "Foundation",
    "Warped",
    "Guardian of the Farm",
    "Tatuaje",
    "Illusione",
    "Viaje",
    "L'Atelier",
    "Caldwell",
    "Long Live The King",
    "Eastern Standard",
    "Undercrown",
    "Flying Pig",
    "Feral Pig",
    "Liga 9",
    "Liga Unico",
    "Herrera Esteli",
];

// Kept verbatim, duplicates and capitalized entries included. Lookups lower-case
// the token first, so the capitalized entries never match.
const STOP_WORDS: &[&str] = &[
    "very", "good", "This", "the", "He", "small", "could", "all", "day", "long", "Diet", "Dr",
    "Pepper", "stuff", "gave", "me", "on", "is", "and", "with", "from", "for", "just", "smoke",
    "smoking", "cigar", "cigars", "today", "tonight", "morning", "afternoon", "evening", "night",
    "first", "last", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "birthday", "anniversary", "review", "box", "band", "burn", "draw", "flavor", "flavours",
    "taste", "tasting", "notes", "profile", "construction", "ash", "wrapper", "binder", "filler",
    "blend", "edition", "special", "reserve", "series", "classic", "original", "vintage",
    "heritage", "gold", "silver", "platinum", "diamond", "red", "black", "blue", "green", "white",
    "pig", "feral", "flying", "unico", "liga", "no", "nicaraguan", "dominican", "honduran",
    "cuban", "connecticut", "maduro", "habano", "corojo", "broadleaf", "shade", "natural",
    "double", "triple", "single", "robusto", "toro", "gordo", "lancero", "churchill", "corona",
    "petit", "monte", "cristo", "padron", "arturo", "fuente", "romeo", "julieta", "cohiba", "hoyo",
    "de", "monterrey", "partagas", "h", "upmann", "oliva", "rocky", "patel", "drew", "estate",
    "my", "father", "perdomo", "camacho", "gurkha", "alec", "bradley", "crowned", "heads",
    "foundation", "warped", "guardian", "of", "the", "farm", "tatuaje", "illusione", "viaje",
    "latelier", "caldwell", "long", "live", "king", "eastern", "standard", "undercrown", "herrera",
    "esteli", "serie", "v", "g", "o", "p", "1964", "1926", "family", "reserve", "anniversary",
    "holiday", "special", "edition",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

fn lowered_brands() -> &'static [(String, &'static str)] {
    static LOWERED: OnceLock<Vec<(String, &'static str)>> = OnceLock::new();
    LOWERED.get_or_init(|| BRANDS.iter().map(|b| (b.to_lowercase(), *b)).collect())
}

/// True when `token`, lower-cased, is in the stop-word set.
pub fn is_stop_word(token: &str) -> bool {
    stop_words().contains(token.to_lowercase().as_str())
}

/// Canonical brands occurring anywhere in `text`, case-insensitively, in table order.
pub fn brands_in(text: &str) -> impl Iterator<Item = &'static str> {
    let lower = text.to_lowercase();
    lowered_brands()
        .iter()
        .filter(move |(needle, _)| lower.contains(needle.as_str()))
        .map(|(_, brand)| *brand)
}

pub fn contains_brand(text: &str) -> bool {
    brands_in(text).next().is_some()
}

/// Map a product name to its brand label.
///
/// Falls back to the first word of the name, then to `"Unknown"`.
pub fn resolve_brand(name: &str) -> String {
    if let Some(brand) = brands_in(name).next() {
        return brand.to_string();
    }
    name.split_whitespace()
        .next()
        .unwrap_or("Unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_table_has_34_entries() {
        assert_eq!(BRANDS.len(), 34);
    }

    #[test]
    fn stop_words_are_matched_lowercased() {
        assert!(is_stop_word("Cohiba"));
        assert!(is_stop_word("ROBUSTO"));
        assert!(!is_stop_word("Hemingway"));
        // Capitalized table entries are unreachable once the token is lowered.
        assert!(!is_stop_word("This"));
        assert!(!is_stop_word("pepper"));
    }

    #[test]
    fn resolves_first_brand_in_table_order() {
        assert_eq!(resolve_brand("Arturo Fuente Hemingway"), "Arturo Fuente");
        assert_eq!(resolve_brand("cohiba behike"), "Cohiba");
        // "Liga Privada" precedes "Liga 9" in the table.
        assert_eq!(resolve_brand("Liga 9 vs Liga Privada"), "Liga Privada");
    }

    #[test]
    fn resolution_ignores_position_in_name() {
        let a = resolve_brand("Padron and Oliva night");
        let b = resolve_brand("Oliva and Padron night");
        assert_eq!(a, b);
        assert_eq!(a, "Padron");
    }

    #[test]
    fn falls_back_to_first_word_then_unknown() {
        assert_eq!(resolve_brand("Davidoff Winston Churchill"), "Davidoff");
        assert_eq!(resolve_brand("   "), "Unknown");
        assert_eq!(resolve_brand(""), "Unknown");
    }

    #[test]
    fn brands_in_reports_every_hit() {
        let hits: Vec<_> = brands_in("Feral Pig beats Flying Pig").collect();
        assert_eq!(hits, vec!["Flying Pig", "Feral Pig"]);
        assert!(contains_brand("an l'atelier lat46"));
        assert!(!contains_brand("I love my Diet Dr Pepper"));
    }
}
