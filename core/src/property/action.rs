//! Undoable property edits for [`EditActionHistory`](crate::abstract_editor::EditActionHistory).

use super::event::PropertyChangedEvent;
use super::key::PropertyKey;
use super::value::PropertyValue;
use crate::abstract_editor::{EditAction, EditActionError, EditActionResult, Editable};
use crate::material::PbrMaterial;

impl Editable for PbrMaterial {}

/// Reversible write of one bound field.
///
/// Consecutive edits of the same key merge into one undo step, so a slider
/// drag that commits every frame undoes in one go.
#[derive(Debug)]
pub struct SetPropertyAction {
    key: PropertyKey,
    old_value: PropertyValue,
    new_value: PropertyValue,
    description: String,
}

impl SetPropertyAction {
    pub fn new(key: PropertyKey, old_value: PropertyValue, new_value: PropertyValue) -> Self {
        Self {
            key,
            old_value,
            new_value,
            description: format!("Set {key}"),
        }
    }

    pub fn key(&self) -> PropertyKey {
        self.key
    }

    fn write(&self, material: &mut PbrMaterial, value: &PropertyValue) -> EditActionResult {
        material
            .set(self.key, value.clone())
            .map(|_| ())
            .map_err(|e| EditActionError::InvalidState(e.to_string()))
    }
}

impl From<&PropertyChangedEvent> for SetPropertyAction {
    fn from(event: &PropertyChangedEvent) -> Self {
        Self::new(event.key, event.initial_value.clone(), event.value.clone())
    }
}

impl EditAction<PbrMaterial> for SetPropertyAction {
    fn apply(&mut self, material: &mut PbrMaterial) -> EditActionResult {
        self.write(material, &self.new_value)
    }

    fn undo(&mut self, material: &mut PbrMaterial) -> EditActionResult {
        self.write(material, &self.old_value)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn merge(
        &mut self,
        other: Box<dyn EditAction<PbrMaterial>>,
    ) -> Option<Box<dyn EditAction<PbrMaterial>>> {
        if let Some(other) = other.as_any().downcast_ref::<Self>()
            && other.key == self.key
        {
            self.new_value = other.new_value.clone();
            return None;
        }
        Some(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_editor::{DEFAULT_MAX_UNDO, EditActionHistory};
    use crate::material::TextureSlot;

    fn set(key: PropertyKey, old: f32, new: f32) -> Box<SetPropertyAction> {
        Box::new(SetPropertyAction::new(
            key,
            PropertyValue::Float(old),
            PropertyValue::Float(new),
        ))
    }

    #[test]
    fn undo_restores_old_value() {
        let mut mat = PbrMaterial::default();
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        history
            .execute(set(PropertyKey::Metallic, 1.0, 0.3), &mut mat)
            .unwrap();
        assert_eq!(mat.metallic, 0.3);

        history.undo(&mut mat).unwrap();
        assert_eq!(mat.metallic, 1.0);

        history.redo(&mut mat).unwrap();
        assert_eq!(mat.metallic, 0.3);
    }

    #[test]
    fn drag_on_same_key_merges() {
        let mut mat = PbrMaterial::default();
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        history
            .execute(set(PropertyKey::Roughness, 1.0, 0.9), &mut mat)
            .unwrap();
        history
            .execute(set(PropertyKey::Roughness, 0.9, 0.8), &mut mat)
            .unwrap();
        history
            .execute(set(PropertyKey::Roughness, 0.8, 0.5), &mut mat)
            .unwrap();
        assert_eq!(history.undo_count(), 1);

        history.undo(&mut mat).unwrap();
        assert_eq!(mat.roughness, 1.0);
    }

    #[test]
    fn different_keys_do_not_merge() {
        let mut mat = PbrMaterial::default();
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        history
            .execute(set(PropertyKey::Roughness, 1.0, 0.5), &mut mat)
            .unwrap();
        history
            .execute(set(PropertyKey::Metallic, 1.0, 0.5), &mut mat)
            .unwrap();
        assert_eq!(history.undo_count(), 2);
        assert_eq!(
            history.undo_descriptions().collect::<Vec<_>>(),
            vec!["Set material.metallic", "Set material.roughness"]
        );
    }

    #[test]
    fn undo_fails_when_texture_was_unlinked() {
        let mut mat = PbrMaterial::default();
        let mut action = set(PropertyKey::TextureLevel(TextureSlot::Bump), 1.0, 2.0);
        let err = action.apply(&mut mat).unwrap_err();
        assert!(matches!(err, EditActionError::InvalidState(_)));
    }

    #[test]
    fn built_from_event() {
        let event = PropertyChangedEvent {
            key: PropertyKey::SheenEnabled,
            initial_value: PropertyValue::Bool(false),
            value: PropertyValue::Bool(true),
        };
        let mut mat = PbrMaterial::default();
        let mut action = SetPropertyAction::from(&event);
        assert_eq!(action.key(), PropertyKey::SheenEnabled);
        action.apply(&mut mat).unwrap();
        assert!(mat.sheen.is_enabled);
        action.undo(&mut mat).unwrap();
        assert!(!mat.sheen.is_enabled);
    }

    #[test]
    fn nested_texture_levels_have_distinct_descriptions() {
        let bump = set(PropertyKey::TextureLevel(TextureSlot::Bump), 1.0, 0.5);
        let coat_bump = set(PropertyKey::TextureLevel(TextureSlot::ClearCoatBump), 1.0, 0.5);
        assert_eq!(bump.description(), "Set bumpTexture.level");
        assert_eq!(coat_bump.description(), "Set clearCoat.bumpTexture.level");
    }
}
