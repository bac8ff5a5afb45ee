use serde::{Deserialize, Serialize};

pub const DEFAULT_ORIGIN: &str = "Dominican Republic";
pub const DEFAULT_STRENGTH: &str = "Medium";
pub const DEFAULT_WRAPPER: &str = "Natural";
pub const DEFAULT_BINDER: &str = "Dominican";
pub const DEFAULT_FILLER: &str = "Dominican";
pub const DEFAULT_PRICE_RANGE: &str = "$$";
pub const DEFAULT_RATING: f64 = 4.0;
pub const DEFAULT_CATEGORY: &str = "Premium";

/// One extracted cigar, ready for storage.
///
/// Only `name` and `brand` come from the text; everything else is a placeholder
/// to be filled in by hand later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub brand: String,
    pub origin: String,
    pub strength: String,
    pub wrapper: String,
    pub binder: String,
    pub filler: String,
    pub price_range: String,
    pub rating: f64,
    pub description: String,
    pub image_url: String,
    pub category: String,
}

impl Record {
    pub fn new(name: &str, brand: &str) -> Self {
        Record {
            name: name.to_string(),
            brand: brand.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            strength: DEFAULT_STRENGTH.to_string(),
            wrapper: DEFAULT_WRAPPER.to_string(),
            binder: DEFAULT_BINDER.to_string(),
            filler: DEFAULT_FILLER.to_string(),
            price_range: DEFAULT_PRICE_RANGE.to_string(),
            rating: DEFAULT_RATING,
            description: describe(name),
            image_url: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

pub fn describe(name: &str) -> String {
    format!("Premium {name} cigar with excellent construction and flavor profile.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hemingway_record() {
        let r = Record::new("Arturo Fuente Hemingway", "Arturo Fuente");
        assert_eq!(r.name, "Arturo Fuente Hemingway");
        assert_eq!(r.brand, "Arturo Fuente");
        assert_eq!(
            r.description,
            "Premium Arturo Fuente Hemingway cigar with excellent construction and flavor profile."
        );
        assert_eq!(r.origin, "Dominican Republic");
        assert_eq!(r.price_range, "$$");
        assert_eq!(r.rating, 4.0);
        assert!(r.image_url.is_empty());
        assert_eq!(r.category, "Premium");
    }

    #[test]
    fn serializes_fields_in_declared_order() {
        let record = Record::new("L'Atelier Surrogates", "L'Atelier");
        let json = serde_json::to_string(&record).unwrap();
        let keys = [
            "\"name\"",
            "\"brand\"",
            "\"origin\"",
            "\"strength\"",
            "\"wrapper\"",
            "\"binder\"",
            "\"filler\"",
            "\"price_range\"",
            "\"rating\"",
            "\"description\"",
            "\"image_url\"",
            "\"category\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(json.contains("\"rating\":4.0"));
    }
}
