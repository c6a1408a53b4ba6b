/// Identifies one slot of the two forms' input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    PostCode,
    HouseNumber,
    FirstName,
    LastName,
    SelectedAddress,
}

/// Ephemeral keyed string fields backing the search and person forms.
///
/// All slots default to the empty string. A clear resets all five slots at
/// once; there is no partial reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub post_code: String,
    pub house_number: String,
    pub first_name: String,
    pub last_name: String,
    /// Id of the candidate currently marked in the results list.
    pub selected_address: String,
}

impl FormFields {
    pub fn set(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::PostCode => self.post_code = value,
            FieldKey::HouseNumber => self.house_number = value,
            FieldKey::FirstName => self.first_name = value,
            FieldKey::LastName => self.last_name = value,
            FieldKey::SelectedAddress => self.selected_address = value,
        }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::PostCode => &self.post_code,
            FieldKey::HouseNumber => &self.house_number,
            FieldKey::FirstName => &self.first_name,
            FieldKey::LastName => &self.last_name,
            FieldKey::SelectedAddress => &self.selected_address,
        }
    }

    /// Resets every slot to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
