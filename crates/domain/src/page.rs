use strum::{AsRefStr, Display, EnumIter};

use crate::Name;

/// Top-level view, mirrored into the page-state tag of the document.
#[derive(AsRefStr, Display, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Today,
    Workout,
    Exercise,
    Summary,
    Browse,
}

/// Section mounted into the main container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    WorkoutPreview,
    Workout,
    ExerciseForm(Name),
    Summary,
    Browse,
}

impl Section {
    #[must_use]
    pub fn page(&self) -> Page {
        match self {
            Section::WorkoutPreview => Page::Today,
            Section::Workout => Page::Workout,
            Section::ExerciseForm(_) => Page::Exercise,
            Section::Summary => Page::Summary,
            Section::Browse => Page::Browse,
        }
    }

    /// Structural marker of the section, used as its class name.
    #[must_use]
    pub fn marker(&self) -> &'static str {
        match self {
            Section::WorkoutPreview => "workout-preview",
            Section::Workout => "workout-section",
            Section::ExerciseForm(_) => "exercise-data-form",
            Section::Summary => "summary-section",
            Section::Browse => "browse-section",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Mounted,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    page: Page,
    mounted: Option<Section>,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: Page::Today,
            mounted: None,
        }
    }

    /// Sets the page state and mounts the section unless it is already mounted.
    pub fn render(&mut self, section: Section) -> Render {
        self.page = section.page();

        if self.mounted.as_ref() == Some(&section) {
            return Render::Unchanged;
        }

        self.mounted = Some(section);
        Render::Mounted
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn mounted(&self) -> Option<&Section> {
        self.mounted.as_ref()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(AsRefStr, Display, EnumIter, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    #[default]
    Today,
    Summary,
    Browse,
}

impl NavItem {
    #[must_use]
    pub fn section(self) -> Section {
        match self {
            NavItem::Today => Section::WorkoutPreview,
            NavItem::Summary => Section::Summary,
            NavItem::Browse => Section::Browse,
        }
    }
}
