use super::surface::{FormField, Scene, SidebarEntry};
use crate::state::Cat;

/// Projects cat records onto the scene.
///
/// The renderer holds the surfaces and nothing else; every call overwrites
/// the region it targets.
#[derive(Debug, Default)]
pub struct Renderer {
    scene: Scene,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Show `cat` on the display surface and bind the surface to `index`
    pub fn render_display(&mut self, cat: &Cat, index: usize) {
        let display = &mut self.scene.display;
        display.title = cat.name.clone();
        display.image_source = cat.image_source.clone();
        display.counter = cat.click_count.to_string();
        display.bound_index = Some(index);
    }

    /// Rebuild the sidebar, one entry per cat
    pub fn render_sidebar(&mut self, cats: &[Cat]) {
        let entries = &mut self.scene.sidebar.entries;
        entries.clear();
        entries.extend(cats.iter().enumerate().map(|(index, cat)| SidebarEntry {
            index,
            label: cat.name.clone(),
        }));
    }

    pub fn render_sidebar_visibility(&mut self, open: bool) {
        self.scene.sidebar.visible = open;
    }

    pub fn render_admin_panel(&mut self, visible: bool) {
        self.scene.admin.visible = visible;
    }

    pub fn set_form_field(&mut self, field: FormField, value: String) {
        self.scene.admin.form.set(field, value);
    }

    pub fn clear_admin_form(&mut self) {
        self.scene.admin.form.clear();
    }
}
