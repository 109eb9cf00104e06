//! Multiplicity containers: the functional / non-functional wrapper around
//! property slots.

use crate::error::CodecError;

use super::slot::Slot;

/// Holds the value occurrences of one property.
///
/// A functional property holds at most one slot; a non-functional property
/// holds an ordered sequence (insertion order significant, duplicates
/// permitted). Containers are created empty alongside their owning object
/// and are only resized by explicit mutation or by deserialization.
#[derive(Debug, Clone)]
pub enum PropertyContainer {
    Functional(Option<Slot>),
    Many(Vec<Slot>),
}

impl PropertyContainer {
    pub(crate) fn empty(functional: bool) -> Self {
        if functional {
            PropertyContainer::Functional(None)
        } else {
            PropertyContainer::Many(Vec::new())
        }
    }

    pub fn is_functional(&self) -> bool {
        matches!(self, PropertyContainer::Functional(_))
    }

    pub fn len(&self) -> usize {
        match self {
            PropertyContainer::Functional(slot) => usize::from(slot.is_some()),
            PropertyContainer::Many(slots) => slots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn at(&self, index: usize) -> Option<&Slot> {
        match self {
            PropertyContainer::Functional(slot) => {
                if index == 0 {
                    slot.as_ref()
                } else {
                    None
                }
            }
            PropertyContainer::Many(slots) => slots.get(index),
        }
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut Slot> {
        match self {
            PropertyContainer::Functional(slot) => {
                if index == 0 {
                    slot.as_mut()
                } else {
                    None
                }
            }
            PropertyContainer::Many(slots) => slots.get_mut(index),
        }
    }

    /// Append a value. On a functional container this replaces the value --
    /// the container never holds more than one.
    pub fn append(&mut self, slot: Slot) {
        match self {
            PropertyContainer::Functional(current) => *current = Some(slot),
            PropertyContainer::Many(slots) => slots.push(slot),
        }
    }

    /// Prepend a value. On a functional container this replaces the value.
    pub fn prepend(&mut self, slot: Slot) {
        match self {
            PropertyContainer::Functional(current) => *current = Some(slot),
            PropertyContainer::Many(slots) => slots.insert(0, slot),
        }
    }

    /// Insert at `index`, shifting later elements. `index == len` appends.
    pub fn insert_at(&mut self, index: usize, slot: Slot) -> Result<(), CodecError> {
        let len = self.len();
        if index > len {
            return Err(CodecError::IndexOutOfRange { index, len });
        }
        match self {
            PropertyContainer::Functional(current) => *current = Some(slot),
            PropertyContainer::Many(slots) => slots.insert(index, slot),
        }
        Ok(())
    }

    /// Remove and return the value at `index`, shifting later elements.
    pub fn remove_at(&mut self, index: usize) -> Result<Slot, CodecError> {
        let len = self.len();
        if index >= len {
            return Err(CodecError::IndexOutOfRange { index, len });
        }
        match self {
            PropertyContainer::Functional(current) => match current.take() {
                Some(slot) => Ok(slot),
                None => Err(CodecError::IndexOutOfRange { index, len }),
            },
            PropertyContainer::Many(slots) => Ok(slots.remove(index)),
        }
    }

    /// Replace the container's contents with a single value.
    pub fn set(&mut self, slot: Slot) {
        match self {
            PropertyContainer::Functional(current) => *current = Some(slot),
            PropertyContainer::Many(slots) => {
                slots.clear();
                slots.push(slot);
            }
        }
    }

    pub fn is_set(&self) -> bool {
        !self.is_empty()
    }

    pub fn clear(&mut self) {
        match self {
            PropertyContainer::Functional(slot) => *slot = None,
            PropertyContainer::Many(slots) => slots.clear(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        match self {
            PropertyContainer::Functional(slot) => slot.as_slice().iter(),
            PropertyContainer::Many(slots) => slots.as_slice().iter(),
        }
    }
}
