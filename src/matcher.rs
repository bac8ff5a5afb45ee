use regex::Regex;
use std::sync::OnceLock;

use crate::brands::brands_in;

/// Run of capitalized words; this is the span each rule captures.
const NAME_SPAN: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*";

/// Trailing keyword sets, one rule each, applied in this order.
const RULE_KEYWORDS: &[&str] = &[
    r"Cigar|Robusto|Churchill|Corona|Toro|Gordo|Lancero|Petit\s+Corona",
    r"Series|Reserve|Limited|Special|Premium",
    r"No\.?\d+",
    r"Maduro|Natural|Connecticut|Habano|Corojo",
    r"(?:Double|Triple|Single)\s+(?:Claro|Maduro|Natural)",
    r"Classic|Original|Vintage|Heritage",
    r"Gold|Silver|Platinum|Diamond",
    r"Red|Black|Blue|Green|White",
    r"Monte|Cristo|Padron|Arturo|Fuente|Romeo|Julieta",
    r"Cohiba|Hoyo|de\s+Monterrey|Partagas|H\s*Upmann",
    r"Oliva|Rocky|Patel|Drew|Estate|Liga|Privada",
    r"My\s+Father|Perdomo|Camacho|Gurkha|Alec|Bradley",
    r"Crowned|Heads|Foundation|Warped|Guardian|of\s+the\s+Farm",
    r"Tatuaje|Illusione|Viaje|LAtelier|Lat56",
    r"Caldwell|Long\s+Live\s+The\s+King|Eastern\s+Standard",
    r"Undercrown|Undercrown\s+Shade|Undercrown\s+Maduro",
    r"Flying\s+Pig|Feral|Pig|Liga\s+9|Liga\s+Unico",
    r"Herrera|Esteli|Connecticut|Broadleaf|Corojo",
    r"Serie|V|G|O|P|1964|1926|Family\s+Reserve",
    r"Anniversary|Birthday|Holiday|Special|Edition",
];

/// Captures shorter than this many characters (inclusive) are dropped.
const MIN_CAPTURE_CHARS: usize = 3;

fn rules() -> &'static [Regex] {
    static RULES: OnceLock<Vec<Regex>> = OnceLock::new();
    RULES.get_or_init(|| {
        RULE_KEYWORDS
            .iter()
            .map(|kw| {
                Regex::new(&format!(r"(?i)\b({NAME_SPAN})\s+(?:{kw})\b"))
                    .expect("rule pattern compiles")
            })
            .collect()
    })
}

/// Guess product names mentioned in `text`.
///
/// Every rule contributes its captures in match order, then every canonical
/// brand found verbatim is appended. Duplicates are left in place.
pub fn extract_candidates(text: &str) -> Vec<String> {
    let mut out = Vec::new();

    for re in rules() {
        for caps in re.captures_iter(text) {
            let Some(m) = caps.get(1) else {
                continue;
            };
            let name = m.as_str().trim();
            if name.chars().count() > MIN_CAPTURE_CHARS {
                out.push(name.to_string());
            }
        }
    }

    out.extend(brands_in(text).map(str::to_string));
    out
}
