//! Controller: turns interaction events into store mutations and renderer calls.

use crate::state::{Cat, CatUpdate, Store, StoreError};
use crate::ui::renderer::Renderer;
use crate::ui::surface::{FormField, Scene};

/// What a click inside the image region landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The displayed photo itself
    Image,
    /// Padding around the photo
    Container,
}

/// Interaction events, one per thing the user can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    HamburgerClicked,
    SidebarEntryClicked(usize),
    DisplayAreaClicked,
    ImageClicked(ClickTarget),
    AdminButtonClicked,
    AdminCancel,
    AdminSave,
    FormFieldChanged(FormField, String),
}

/// Owns the store and renderer for one window
#[derive(Debug)]
pub struct Controller {
    store: Store,
    renderer: Renderer,
    selection: usize,
    sidebar_open: bool,
}

impl Controller {
    /// Build a controller and run the initial render
    pub fn new(store: Store) -> Result<Self, StoreError> {
        let mut controller = Controller {
            store,
            renderer: Renderer::new(),
            selection: 0,
            sidebar_open: false,
        };
        controller.init()?;
        Ok(controller)
    }

    fn init(&mut self) -> Result<(), StoreError> {
        self.selection = 0;
        self.render_selection()?;
        self.renderer.render_sidebar(self.store.all_cats());
        self.renderer.render_sidebar_visibility(self.sidebar_open);
        self.toggle_admin_panel();
        tracing::debug!(cats = self.store.len(), "controller initialized");
        Ok(())
    }

    pub fn handle(&mut self, event: Event) -> Result<(), StoreError> {
        tracing::debug!(?event, "handling event");
        match event {
            Event::HamburgerClicked => {
                self.set_sidebar(!self.sidebar_open);
            }
            Event::SidebarEntryClicked(index) => {
                self.select(index)?;
            }
            Event::DisplayAreaClicked => {
                self.set_sidebar(false);
                self.close_admin_panel();
            }
            Event::ImageClicked(ClickTarget::Image) => {
                self.increment_selection()?;
            }
            Event::ImageClicked(ClickTarget::Container) => {
                tracing::trace!("ignoring click outside the image");
            }
            Event::AdminButtonClicked => {
                self.toggle_admin_panel();
            }
            Event::AdminCancel => {
                self.renderer.clear_admin_form();
                self.close_admin_panel();
            }
            Event::AdminSave => {
                self.save_admin_form()?;
            }
            Event::FormFieldChanged(field, value) => {
                self.renderer.set_form_field(field, value);
            }
        }
        Ok(())
    }

    pub fn scene(&self) -> &Scene {
        self.renderer.scene()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    #[cfg(test)]
    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_cat(&self) -> Result<&Cat, StoreError> {
        self.store.get_cat(self.selection)
    }

    #[cfg(test)]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[cfg(test)]
    pub fn admin_open(&self) -> bool {
        self.renderer.scene().admin.visible
    }

    fn set_sidebar(&mut self, open: bool) {
        self.sidebar_open = open;
        self.renderer.render_sidebar_visibility(open);
    }

    fn select(&mut self, index: usize) -> Result<(), StoreError> {
        // Validate before touching any state
        let cat = self.store.get_cat(index)?;
        self.renderer.render_display(cat, index);
        self.selection = index;
        self.set_sidebar(false);
        Ok(())
    }

    fn increment_selection(&mut self) -> Result<(), StoreError> {
        let count = self.selected_cat()?.click_count;
        self.store
            .update_count(self.selection, count.saturating_add(1))?;
        self.render_selection()
    }

    /// Show the panel if the flag says so, then flip the flag
    fn toggle_admin_panel(&mut self) {
        let show = self.store.to_show();
        self.renderer.render_admin_panel(show);
        self.store.toggle_to_show();
    }

    /// Hide the panel and arm the next admin click to open it
    fn close_admin_panel(&mut self) {
        self.renderer.render_admin_panel(false);
        self.store.set_to_show(true);
    }

    fn save_admin_form(&mut self) -> Result<(), StoreError> {
        let form = &self.renderer.scene().admin.form;
        let update = CatUpdate::from_form(&form.name, &form.image_source, &form.click_count);
        if update.is_empty() {
            tracing::debug!(selection = self.selection, "admin form saved without changes");
        }

        self.store.update_cat(self.selection, update)?;
        self.render_selection()?;
        // Sidebar labels follow name edits
        self.renderer.render_sidebar(self.store.all_cats());
        self.renderer.clear_admin_form();
        self.close_admin_panel();
        Ok(())
    }

    fn render_selection(&mut self) -> Result<(), StoreError> {
        let cat = self.store.get_cat(self.selection)?;
        self.renderer.render_display(cat, self.selection);
        Ok(())
    }
}
