/// Retained surfaces the renderer writes into.
///
/// The iced `view` function reads these every frame; nothing else
/// touches them directly.

/// The "currently displayed cat" region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySurface {
    pub title: String,
    pub image_source: String,
    pub counter: String,
    /// Catalog index the display is bound to, used to attribute image clicks
    pub bound_index: Option<usize>,
}

/// One selectable sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarSurface {
    pub entries: Vec<SidebarEntry>,
    pub visible: bool,
}

/// Editable fields of the admin form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    ImageSource,
    ClickCount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminForm {
    pub name: String,
    pub image_source: String,
    pub click_count: String,
}

impl AdminForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::ImageSource => &self.image_source,
            FormField::ClickCount => &self.click_count,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::ImageSource => self.image_source = value,
            FormField::ClickCount => self.click_count = value,
        }
    }

    /// Form reset
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminPanelSurface {
    pub visible: bool,
    pub form: AdminForm,
}

/// Every surface of the window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub display: DisplaySurface,
    pub sidebar: SidebarSurface,
    pub admin: AdminPanelSurface,
}
