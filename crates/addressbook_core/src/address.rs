/// A stored address-book entry. Immutable once added to the book.
///
/// `id` comes from the lookup source and is opaque; it takes no part in
/// duplicate detection, which is defined over the remaining six fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub id: String,
    pub street: String,
    pub house_number: String,
    pub postcode: String,
    pub city: String,
    pub first_name: String,
    pub last_name: String,
}

impl Address {
    /// Duplicate equality: exact match on every field except `id`.
    pub fn same_occupant(&self, other: &Address) -> bool {
        self.street == other.street
            && self.house_number == other.house_number
            && self.postcode == other.postcode
            && self.city == other.city
            && self.first_name == other.first_name
            && self.last_name == other.last_name
    }

    /// Returns a copy of this address with the person fields attached.
    pub fn with_person(&self, first_name: &str, last_name: &str) -> Address {
        Address {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..self.clone()
        }
    }
}

/// A raw candidate returned by the lookup source, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
    pub id: String,
    pub street: String,
    pub postcode: String,
    pub city: String,
    /// House number as reported by the source, if any. Normalization
    /// discards it in favor of the number the user searched with.
    pub house_number: Option<String>,
}

impl Candidate {
    /// Builds the canonical address for this candidate.
    ///
    /// The house number is forced to the searched value regardless of what
    /// the source reported. Person fields start empty and are attached at
    /// submission time.
    pub fn normalize(&self, searched_house_number: &str) -> Address {
        Address {
            id: self.id.clone(),
            street: self.street.clone(),
            house_number: searched_house_number.to_string(),
            postcode: self.postcode.clone(),
            city: self.city.clone(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}
