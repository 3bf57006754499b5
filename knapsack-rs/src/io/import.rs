use crate::entities::{Instance, Item};
use crate::error::KnapsackError;
use crate::io::ext_repr::{ExtInstance, ExtItem};
use log::debug;

/// Converts the external representation of an instance into an internal one.
/// Fails on a negative capacity, a negative value or a non-positive weight.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance, KnapsackError> {
    let capacity = u64::try_from(ext_instance.capacity)
        .map_err(|_| KnapsackError::InvalidCapacity(ext_instance.capacity as f64))?;

    let items = ext_instance
        .items
        .iter()
        .enumerate()
        .map(|(i, ext_item)| import_item(i + 1, ext_item))
        .collect::<Result<Vec<Item>, KnapsackError>>()?;

    debug!(
        "[IMPORT] imported instance {:?}: {} items, capacity {capacity}",
        ext_instance.name.as_deref().unwrap_or("-"),
        items.len()
    );

    Instance::new(capacity, items)
}

fn import_item(index: usize, ext_item: &ExtItem) -> Result<Item, KnapsackError> {
    let invalid = || KnapsackError::InvalidItem {
        index,
        value: ext_item.value.into(),
        weight: ext_item.weight.into(),
    };
    let value = u64::try_from(ext_item.value).map_err(|_| invalid())?;
    let weight = u64::try_from(ext_item.weight)
        .ok()
        .filter(|w| *w > 0)
        .ok_or_else(invalid)?;
    Ok(Item::new(index, value, weight))
}
