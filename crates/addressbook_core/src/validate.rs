use std::fmt;

/// The two numeric identifiers accepted by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Postcode,
    HouseNumber,
}

/// Rejection reasons for search identifiers.
///
/// `Display` yields the exact messages the lookup contract requires, so
/// callers can surface them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or both identifiers absent, empty, or whitespace-only.
    MissingFields,
    /// The trimmed postcode has fewer than four characters. Applies to the
    /// postcode only, never the house number.
    PostcodeTooShort,
    /// The value is not composed solely of decimal digits.
    NotNumeric(Field),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => {
                write!(f, "Postcode and street number fields mandatory!")
            }
            ValidationError::PostcodeTooShort => {
                write!(f, "Postcode must be at least 4 digits!")
            }
            ValidationError::NotNumeric(Field::Postcode) => {
                write!(f, "Postcode must be all digits and non negative!")
            }
            ValidationError::NotNumeric(Field::HouseNumber) => {
                write!(f, "Street Number must be all digits and non negative!")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a single identifier and returns its numeric value.
///
/// The whole input must be one or more ASCII digits: signs, decimal points,
/// exponents and surrounding whitespace are all rejected. All-zero input is
/// accepted as zero. The postcode additionally requires at least four
/// characters after trimming, checked before the digit grammar so the length
/// message wins for short inputs that also fail the grammar.
pub fn validate_identifier(raw: &str, field: Field) -> Result<u64, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if field == Field::Postcode && raw.trim().chars().count() < 4 {
        return Err(ValidationError::PostcodeTooShort);
    }
    if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric(field));
    }
    // Acceptance is defined over the digit grammar, not the machine word, so
    // values wider than u64 saturate instead of failing.
    let value = raw.bytes().fold(0u64, |acc, byte| {
        acc.saturating_mul(10).saturating_add(u64::from(byte - b'0'))
    });
    Ok(value)
}

/// Validates the search pair in contract order: the joint missing-field
/// check first, then the postcode length rule, then the digit grammar with
/// the postcode reported before the house number.
pub fn validate_search_terms(
    postcode: &str,
    house_number: &str,
) -> Result<(u64, u64), ValidationError> {
    if postcode.trim().is_empty() || house_number.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    let postcode_value = validate_identifier(postcode, Field::Postcode)?;
    let house_value = validate_identifier(house_number, Field::HouseNumber)?;
    Ok((postcode_value, house_value))
}
