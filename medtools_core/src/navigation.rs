//! Page navigation state machine.
//!
//! Three pages, one active at a time, starting on `Home`. Every transition
//! is unconditional and driven by an explicit user action.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A page of the application
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Bmi,
    #[serde(rename = "creatinine")]
    CreatinineClearance,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Bmi, Page::CreatinineClearance];

    /// Stable identifier used on the command line and in JSON
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Bmi => "bmi",
            Page::CreatinineClearance => "creatinine",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Medical Tools",
            Page::Bmi => "Body Mass Index (BMI)",
            Page::CreatinineClearance => "Creatinine Clearance",
        }
    }

    /// One-line description shown on the home menu
    pub fn summary(&self) -> &'static str {
        match self {
            Page::Home => "Select a calculator",
            Page::Bmi => "WHO classification - weight status assessment",
            Page::CreatinineClearance => "Cockcroft-Gault formula - renal function",
        }
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Holds the active page for one session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationController {
    current: Page,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    /// Switch to `page`. Any page is accepted from any page.
    pub fn navigate_to(&mut self, page: Page) {
        if page != self.current {
            tracing::debug!("Navigating {:?} -> {:?}", self.current, page);
        }
        self.current = page;
    }

    pub fn open_bmi(&mut self) {
        self.navigate_to(Page::Bmi);
    }

    pub fn open_creatinine(&mut self) {
        self.navigate_to(Page::CreatinineClearance);
    }

    pub fn return_home(&mut self) {
        self.navigate_to(Page::Home);
    }

    /// The "return home" action is offered on every page except Home
    pub fn can_return_home(&self) -> bool {
        self.current != Page::Home
    }
}
