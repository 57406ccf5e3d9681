use matgrid_core::Observable;
use matgrid_core::PropertyError;
use matgrid_core::material::PbrMaterial;
use matgrid_core::property::{PropertyChangedEvent, PropertyKey, PropertyValue};

/// Writes `value` onto the bound field and publishes exactly one
/// [`PropertyChangedEvent`] carrying the previous and the new value.
///
/// The value is written as given. Range limits belong to the widget that
/// produced it. On error the material is untouched and nothing is published.
pub fn commit(
    material: &mut PbrMaterial,
    key: PropertyKey,
    value: PropertyValue,
    on_property_changed: Option<&Observable<PropertyChangedEvent>>,
) -> Result<PropertyChangedEvent, PropertyError> {
    let initial_value = match material.set(key, value.clone()) {
        Ok(previous) => previous,
        Err(err) => {
            log::warn!("Rejected edit of {key}: {err}");
            return Err(err);
        }
    };

    let event = PropertyChangedEvent {
        key,
        initial_value,
        value,
    };
    log::debug!("{event}");

    if let Some(channel) = on_property_changed {
        channel.notify_observers(&event);
    }
    Ok(event)
}
