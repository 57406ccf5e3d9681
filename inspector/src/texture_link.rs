//! Texture link lines: selection and per-texture debug view.

use matgrid_core::Observable;
use matgrid_core::debug_mode;
use matgrid_core::material::{PbrMaterial, TextureRef, TextureSlot};

/// Published when the user clicks a texture name in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChanged {
    pub slot: TextureSlot,
    pub texture: TextureRef,
}

/// Published when a texture's debug toggle changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDebugSelection {
    pub slot: TextureSlot,
    pub enabled: bool,
}

/// Shader debug code forced while debugging the texture in `slot`.
pub fn forced_debug_mode(slot: TextureSlot) -> Option<i32> {
    match slot {
        TextureSlot::Metallic => Some(debug_mode::METALLIC),
        TextureSlot::Ambient => Some(debug_mode::AMBIENT_MAP),
        _ => None,
    }
}

/// Which texture, if any, is shown in debug view. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureDebugState {
    selected: Option<TextureSlot>,
}

impl TextureDebugState {
    pub fn selected(&self) -> Option<TextureSlot> {
        self.selected
    }

    pub fn is_selected(&self, slot: TextureSlot) -> bool {
        self.selected == Some(slot)
    }

    /// Flips the debug view of `slot` and returns whether it is now on.
    ///
    /// Switching on a texture deselects any other one without touching
    /// `debug_mode`. Metallic and ambient textures drive `debug_mode`
    /// directly (back to [`debug_mode::NONE`] when switched off); other slots
    /// leave it alone.
    pub fn toggle(
        &mut self,
        slot: TextureSlot,
        material: &mut PbrMaterial,
        on_debug_selection_changed: &Observable<TextureDebugSelection>,
    ) -> bool {
        let enabled = !self.is_selected(slot);

        if enabled
            && let Some(previous) = self.selected
            && previous != slot
        {
            on_debug_selection_changed.notify_observers(&TextureDebugSelection {
                slot: previous,
                enabled: false,
            });
        }
        self.selected = enabled.then_some(slot);

        if let Some(code) = forced_debug_mode(slot) {
            material.debug_mode = if enabled { code } else { debug_mode::NONE };
            log::debug!("debugMode set to {} for {slot:?}", material.debug_mode);
        }
        on_debug_selection_changed.notify_observers(&TextureDebugSelection { slot, enabled });
        enabled
    }

    /// Drops the selection if its texture has been unlinked.
    pub fn sync(
        &mut self,
        material: &mut PbrMaterial,
        on_debug_selection_changed: &Observable<TextureDebugSelection>,
    ) {
        if let Some(slot) = self.selected
            && !material.has_texture(slot)
        {
            self.selected = None;
            self.release(slot, material, on_debug_selection_changed);
        }
    }

    fn release(
        &self,
        slot: TextureSlot,
        material: &mut PbrMaterial,
        on_debug_selection_changed: &Observable<TextureDebugSelection>,
    ) {
        if let Some(code) = forced_debug_mode(slot)
            && material.debug_mode == code
        {
            material.debug_mode = debug_mode::NONE;
        }
        on_debug_selection_changed.notify_observers(&TextureDebugSelection {
            slot,
            enabled: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textured() -> PbrMaterial {
        let mut mat = PbrMaterial::default();
        mat.metallic_texture = Some(TextureRef::new("orm.png"));
        mat.ambient_texture = Some(TextureRef::new("ao.png"));
        mat
    }

    #[test]
    fn switching_texture_applies_new_code() {
        let mut mat = textured();
        let channel = Observable::new();
        let mut state = TextureDebugState::default();

        assert!(state.toggle(TextureSlot::Metallic, &mut mat, &channel));
        assert_eq!(mat.debug_mode, debug_mode::METALLIC);

        assert!(state.toggle(TextureSlot::Ambient, &mut mat, &channel));
        assert_eq!(state.selected(), Some(TextureSlot::Ambient));
        assert_eq!(mat.debug_mode, debug_mode::AMBIENT_MAP);
    }

    #[test]
    fn switching_to_plain_texture_keeps_forced_code() {
        let mut mat = textured();
        mat.albedo_texture = Some(TextureRef::new("albedo.png"));
        let channel = Observable::new();
        let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = seen.clone();
        channel.add(move |s: &TextureDebugSelection| sink.lock().push(*s));
        let mut state = TextureDebugState::default();

        state.toggle(TextureSlot::Metallic, &mut mat, &channel);
        assert!(state.toggle(TextureSlot::Albedo, &mut mat, &channel));

        assert_eq!(mat.debug_mode, debug_mode::METALLIC);
        assert_eq!(state.selected(), Some(TextureSlot::Albedo));
        assert_eq!(
            *seen.lock(),
            [
                TextureDebugSelection { slot: TextureSlot::Metallic, enabled: true },
                TextureDebugSelection { slot: TextureSlot::Metallic, enabled: false },
                TextureDebugSelection { slot: TextureSlot::Albedo, enabled: true },
            ]
        );
    }

    #[test]
    fn unlinking_clears_selection() {
        let mut mat = textured();
        let channel = Observable::new();
        let mut state = TextureDebugState::default();

        state.toggle(TextureSlot::Metallic, &mut mat, &channel);
        mat.metallic_texture = None;
        state.sync(&mut mat, &channel);

        assert_eq!(state.selected(), None);
        assert_eq!(mat.debug_mode, debug_mode::NONE);
    }

    #[test]
    fn only_metallic_and_ambient_force_a_code() {
        for slot in TextureSlot::ALL {
            let expected = match slot {
                TextureSlot::Metallic => Some(62),
                TextureSlot::Ambient => Some(21),
                _ => None,
            };
            assert_eq!(forced_debug_mode(slot), expected, "{slot:?}");
        }
    }
}
