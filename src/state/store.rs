use super::data::{reference_cats, Cat, CatUpdate};
use super::error::StoreError;

/// The Store holds the catalog and the admin-panel visibility flag.
/// It knows nothing about rendering or events.
#[derive(Debug, Clone)]
pub struct Store {
    cats: Vec<Cat>,
    to_show: bool,
}

impl Store {
    /// Create a store over a fixed catalog.
    /// The catalog size never changes for the lifetime of the store.
    pub fn new(cats: Vec<Cat>) -> Self {
        Store {
            cats,
            to_show: false,
        }
    }

    /// Create a store holding the reference catalog
    pub fn seeded() -> Self {
        Self::new(reference_cats())
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    /// Get the cat at `index`
    pub fn get_cat(&self, index: usize) -> Result<&Cat, StoreError> {
        self.cats.get(index).ok_or(StoreError::OutOfRange {
            index,
            len: self.cats.len(),
        })
    }

    /// Read-only view of the whole catalog, in display order
    pub fn all_cats(&self) -> &[Cat] {
        &self.cats
    }

    /// Overwrite the click count of the cat at `index`
    pub fn update_count(&mut self, index: usize, new_count: u32) -> Result<(), StoreError> {
        let cat = self.cat_mut(index)?;
        cat.click_count = new_count;
        Ok(())
    }

    /// Apply a partial update. Absent or blank fields keep their current value.
    pub fn update_cat(&mut self, index: usize, update: CatUpdate) -> Result<(), StoreError> {
        let cat = self.cat_mut(index)?;

        if let Some(name) = update.name.filter(|name| !name.trim().is_empty()) {
            cat.name = name;
        }
        if let Some(source) = update.image_source.filter(|source| !source.trim().is_empty()) {
            cat.image_source = source;
        }
        // Zero is a real value here, not "absent"
        if let Some(count) = update.click_count {
            cat.click_count = count;
        }

        Ok(())
    }

    /// Whether the admin panel should appear on the next admin render
    pub fn to_show(&self) -> bool {
        self.to_show
    }

    pub fn toggle_to_show(&mut self) {
        self.to_show = !self.to_show;
    }

    pub fn set_to_show(&mut self, value: bool) {
        self.to_show = value;
    }

    fn cat_mut(&mut self, index: usize) -> Result<&mut Cat, StoreError> {
        let len = self.cats.len();
        self.cats
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, len })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cat_out_of_range() {
        let store = Store::seeded();
        assert_eq!(
            store.get_cat(5),
            Err(StoreError::OutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_update_count() {
        let mut store = Store::seeded();
        store.update_count(3, 7).unwrap();
        assert_eq!(store.get_cat(3).unwrap().click_count, 7);
        assert!(store.update_count(9, 1).is_err());
    }

    #[test]
    fn test_blank_update_keeps_everything() {
        let mut store = Store::seeded();
        store.update_count(0, 4).unwrap();
        let before = store.get_cat(0).unwrap().clone();

        store
            .update_cat(0, CatUpdate::from_form("", " ", ""))
            .unwrap();

        assert_eq!(store.get_cat(0).unwrap(), &before);
    }

    #[test]
    fn test_blank_strings_in_update_are_ignored() {
        let mut store = Store::seeded();
        let update = CatUpdate {
            name: Some("   ".to_string()),
            image_source: Some(String::new()),
            click_count: None,
        };
        store.update_cat(1, update).unwrap();

        assert_eq!(store.get_cat(1).unwrap().name, "Stunned cat");
        assert_eq!(store.get_cat(1).unwrap().image_source, "assets/stunned-cat.jpg");
    }

    #[test]
    fn test_zero_count_resets() {
        let mut store = Store::seeded();
        store.update_count(2, 12).unwrap();
        store
            .update_cat(2, CatUpdate::from_form("", "", "0"))
            .unwrap();
        assert_eq!(store.get_cat(2).unwrap().click_count, 0);
    }

    #[test]
    fn test_visibility_flag() {
        let mut store = Store::seeded();
        assert!(!store.to_show());
        store.toggle_to_show();
        assert!(store.to_show());
        store.set_to_show(false);
        assert!(!store.to_show());
    }

    #[test]
    fn test_all_cats_is_ordered_view() {
        let store = Store::seeded();
        let names: Vec<&str> = store.all_cats().iter().map(|cat| cat.name.as_str()).collect();
        assert_eq!(names[..2], ["Floor cat", "Stunned cat"]);
        assert_eq!(store.all_cats().len(), store.len());
    }
}
