use crate::{Experience, ExperiencePatch};

use uuid::Uuid;

/// In-place editing of a profile's experience list.
///
/// Lookup is a linear scan; ids are unique within a list so the first match
/// is the only match.
pub trait ExperienceList {
    /// Newest entries go first.
    fn insert_front(&mut self, entry: Experience);

    fn position_of(&self, id: Uuid) -> Option<usize>;

    /// Remove by id. The list is untouched when the id is absent.
    fn remove_by_id(&mut self, id: Uuid) -> Option<Experience>;

    /// Apply `patch` to the matching entry. Returns false when the id is absent.
    fn update_by_id(&mut self, id: Uuid, patch: &ExperiencePatch) -> bool;
}

impl ExperienceList for Vec<Experience> {
    fn insert_front(&mut self, entry: Experience) {
        self.insert(0, entry);
    }

    fn position_of(&self, id: Uuid) -> Option<usize> {
        self.iter().position(|e| e.id == id)
    }

    fn remove_by_id(&mut self, id: Uuid) -> Option<Experience> {
        self.position_of(id).map(|index| self.remove(index))
    }

    fn update_by_id(&mut self, id: Uuid, patch: &ExperiencePatch) -> bool {
        match self.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                patch.apply(entry);
                true
            }
            None => false,
        }
    }
}
