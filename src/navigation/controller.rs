//! Navigation Controller
//!
//! Keeps exactly one section active and tells the data layer whenever the
//! user lands on a section.

use std::rc::Rc;

use super::{NavigationError, Section};

/// Per-section data-load hook
///
/// Fire-and-forget: the controller does not wait for or inspect the load.
pub trait SectionLoader {
    fn load(&self, section: Section);
}

/// Loader that only logs, standing in for the real fetches
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLoader;

impl SectionLoader for TracingLoader {
    fn load(&self, section: Section) {
        tracing::info!(section = %section, "Loading {}...", section.id());
    }
}

/// Owns the active section
pub struct NavigationController {
    active: Section,
    loader: Rc<dyn SectionLoader>,
}

impl NavigationController {
    /// Start on the dashboard
    pub fn new(loader: Rc<dyn SectionLoader>) -> Self {
        Self {
            active: Section::Dashboard,
            loader,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Header text for the active section
    pub fn page_title(&self) -> String {
        self.active.title()
    }

    /// Fire the loader for the section shown at startup
    pub fn load_initial(&self) {
        self.loader.load(self.active);
    }

    /// Back to the dashboard without loading anything (after logout)
    pub fn reset(&mut self) {
        self.active = Section::Dashboard;
    }

    /// Switch to `section`, then trigger its loader
    ///
    /// Re-navigating to the active section still triggers the loader.
    pub fn navigate_to(&mut self, section: Section) {
        if section != self.active {
            tracing::debug!(from = %self.active, to = %section, "Navigating");
        }
        self.active = section;
        self.loader.load(section);
    }

    /// Navigate by identifier
    ///
    /// Unknown identifiers leave the active section untouched.
    pub fn navigate_to_id(&mut self, id: &str) -> Result<Section, NavigationError> {
        let section = id.parse::<Section>().map_err(|e| {
            tracing::warn!(id, "Ignoring navigation to unknown section");
            e
        })?;
        self.navigate_to(section);
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLoader {
        loaded: RefCell<Vec<Section>>,
    }

    impl SectionLoader for RecordingLoader {
        fn load(&self, section: Section) {
            self.loaded.borrow_mut().push(section);
        }
    }

    fn controller() -> (NavigationController, Rc<RecordingLoader>) {
        let loader = Rc::new(RecordingLoader::default());
        (NavigationController::new(loader.clone()), loader)
    }

    #[test]
    fn test_starts_on_dashboard() {
        let (nav, loader) = controller();
        assert_eq!(nav.active(), Section::Dashboard);
        assert_eq!(nav.page_title(), "Dashboard");
        assert!(loader.loaded.borrow().is_empty());
    }

    #[test]
    fn test_navigation_triggers_only_target_loader() {
        let (mut nav, loader) = controller();

        nav.navigate_to(Section::Dashboard);
        loader.loaded.borrow_mut().clear();
        nav.navigate_to(Section::Patients);

        assert_eq!(nav.active(), Section::Patients);
        assert_eq!(*loader.loaded.borrow(), vec![Section::Patients]);
    }

    #[test]
    fn test_renavigation_reloads() {
        let (mut nav, loader) = controller();
        nav.navigate_to(Section::Billing);
        nav.navigate_to(Section::Billing);

        assert_eq!(nav.active(), Section::Billing);
        assert_eq!(*loader.loaded.borrow(), vec![Section::Billing, Section::Billing]);
    }

    #[test]
    fn test_unknown_id_is_rejected_without_side_effects() {
        let (mut nav, loader) = controller();
        nav.navigate_to(Section::Staff);

        let result = nav.navigate_to_id("inventory");

        assert!(matches!(result, Err(NavigationError::UnknownSection(id)) if id == "inventory"));
        assert_eq!(nav.active(), Section::Staff);
        assert_eq!(*loader.loaded.borrow(), vec![Section::Staff]);
    }

    #[test]
    fn test_navigate_by_id() {
        let (mut nav, _loader) = controller();
        assert_eq!(nav.navigate_to_id("reports").unwrap(), Section::Reports);
        assert_eq!(nav.page_title(), "Reports");
    }

    #[test]
    fn test_load_initial() {
        let (nav, loader) = controller();
        nav.load_initial();
        assert_eq!(*loader.loaded.borrow(), vec![Section::Dashboard]);
    }
}
