use std::collections::BTreeMap;

use crate::pitch::display_name;

/// Keys currently held down, keyed by global note index.
///
/// At most one entry per index; iteration runs in ascending key order so
/// chord labels come out low to high.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldNotes {
    notes: BTreeMap<usize, String>,
}

impl HeldNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, global_index: usize) -> bool {
        self.notes.contains_key(&global_index)
    }

    /// Returns false if the key was already held (the name is left as is)
    pub fn insert(&mut self, global_index: usize, name: impl Into<String>) -> bool {
        if self.contains(global_index) {
            return false;
        }
        self.notes.insert(global_index, name.into());
        true
    }

    pub fn remove(&mut self, global_index: usize) -> Option<String> {
        self.notes.remove(&global_index)
    }

    /// Hold a free key or release a held one. Returns whether it is now held.
    pub fn toggle(&mut self, global_index: usize, name: impl Into<String>) -> bool {
        if self.remove(global_index).is_some() {
            false
        } else {
            self.notes.insert(global_index, name.into());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.notes.iter().map(|(&index, name)| (index, name.as_str()))
    }

    pub fn names(&self) -> Vec<String> {
        self.notes.values().cloned().collect()
    }

    /// Rename every held key for a newly selected octave.
    pub fn relabel(&mut self, octave: u8) {
        for (&index, name) in self.notes.iter_mut() {
            *name = display_name(index, octave);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_unique_per_index() {
        let mut held = HeldNotes::new();
        assert!(held.insert(4, "E4"));
        assert!(!held.insert(4, "E5"));
        assert_eq!(held.len(), 1);
        assert_eq!(held.names(), vec!["E4".to_string()]);
    }

    #[test]
    fn toggle_round_trip() {
        let mut held = HeldNotes::new();
        assert!(held.toggle(0, "C4"));
        assert!(held.contains(0));
        assert!(!held.toggle(0, "C4"));
        assert!(held.is_empty());
    }

    #[test]
    fn iterates_low_to_high() {
        let mut held = HeldNotes::new();
        held.insert(16, "E5");
        held.insert(0, "C4");
        held.insert(7, "G4");
        let order: Vec<usize> = held.iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![0, 7, 16]);
    }

    #[test]
    fn relabel_follows_octave() {
        let mut held = HeldNotes::new();
        held.insert(0, "C4");
        held.insert(13, "C#5");
        held.relabel(2);
        assert_eq!(held.names(), vec!["C2".to_string(), "C#3".to_string()]);
    }
}
