use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::Section;

/// Grid state shared across materials and persisted by the host: which
/// sections are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalState {
    /// Section title to expanded flag. Sections absent here use their default.
    pub open_sections: BTreeMap<String, bool>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, section: &Section) -> bool {
        self.open_sections
            .get(section.title)
            .copied()
            .unwrap_or(!section.closed_by_default)
    }

    pub fn set_open(&mut self, section: &Section, open: bool) {
        self.open_sections.insert(section.title.to_owned(), open);
    }

    pub fn toggle(&mut self, section: &Section) {
        let open = self.is_open(section);
        self.set_open(section, !open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    #[test]
    fn defaults_follow_layout() {
        let state = GlobalState::new();
        assert!(state.is_open(&layout::GENERAL));
        assert!(!state.is_open(layout::section("DEBUG").unwrap()));
    }

    #[test]
    fn toggle_overrides_default() {
        let mut state = GlobalState::new();
        let levels = layout::section("LEVELS").unwrap();
        state.toggle(levels);
        assert!(state.is_open(levels));
        state.toggle(levels);
        assert!(!state.is_open(levels));
    }

    #[test]
    fn survives_toml() {
        let mut state = GlobalState::new();
        state.set_open(layout::section("DEBUG").unwrap(), true);
        state.set_open(&layout::TEXTURES, false);

        let text = toml::to_string(&state).unwrap();
        let back: GlobalState = toml::from_str(&text).unwrap();
        assert_eq!(back, state);
    }
}
