use crate::models::CountryRef;

/// Orders the selector list by display name, case-insensitively. The sort
/// is stable so equal names keep their feed order, and original casing is
/// preserved.
pub fn sort_countries(mut countries: Vec<CountryRef>) -> Vec<CountryRef> {
    countries.sort_by_cached_key(|c| c.name.to_lowercase());
    countries
}
