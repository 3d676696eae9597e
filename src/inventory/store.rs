//! Ordered, id-unique list of pets mirroring the server.

use crate::pet::{Pet, PetId};

/// Server-confirmed pets in server order. Holds at most one pet per id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListStore {
    pets: Vec<Pet>,
}

impl ListStore {
    /// Build from a list response. Later duplicates of an id are dropped.
    pub fn from_server(pets: Vec<Pet>) -> Self {
        let mut store = Self {
            pets: Vec::with_capacity(pets.len()),
        };
        for pet in pets {
            if store.contains(pet.id) {
                tracing::warn!(id = pet.id, "Dropping duplicate pet id from server");
                continue;
            }
            store.pets.push(pet);
        }
        store
    }

    pub fn as_slice(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn get(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn contains(&self, id: PetId) -> bool {
        self.get(id).is_some()
    }

    /// Append a newly created pet. An id already present is replaced in place.
    pub fn append(&mut self, pet: Pet) {
        match self.position(pet.id) {
            Some(index) => {
                tracing::warn!(id = pet.id, "Created pet reuses an existing id");
                self.pets[index] = pet;
            }
            None => self.pets.push(pet),
        }
    }

    /// Replace the entry for `id` with `pet`, keeping its position.
    ///
    /// Returns false when `id` is not in the store. If `pet` carries a
    /// different id that another entry already holds, that entry is dropped.
    pub fn replace(&mut self, id: PetId, pet: Pet) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if pet.id != id {
            if let Some(other) = self.position(pet.id) {
                tracing::warn!(from = id, to = pet.id, "Updated pet collides with another id");
                self.pets.remove(other);
                let index = if other < index { index - 1 } else { index };
                self.pets[index] = pet;
                return true;
            }
        }
        self.pets[index] = pet;
        true
    }

    /// Remove the entry for `id`, if any.
    pub fn remove(&mut self, id: PetId) -> Option<Pet> {
        let index = self.position(id)?;
        Some(self.pets.remove(index))
    }

    fn position(&self, id: PetId) -> Option<usize> {
        self.pets.iter().position(|pet| pet.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(id: PetId, name: &str) -> Pet {
        Pet {
            id,
            name: name.to_string(),
            species: "Dog".to_string(),
            breed: "Lab".to_string(),
            gender: "M".to_string(),
            image: "u".to_string(),
            description: "friendly".to_string(),
            price: 1.0,
        }
    }

    fn names(store: &ListStore) -> Vec<&str> {
        store.as_slice().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn from_server_keeps_order_and_first_duplicate() {
        let store = ListStore::from_server(vec![pet(2, "b"), pet(1, "a"), pet(2, "dup")]);
        assert_eq!(names(&store), vec!["b", "a"]);
    }

    #[test]
    fn append_pushes_new_ids_to_the_end() {
        let mut store = ListStore::from_server(vec![pet(1, "a")]);
        store.append(pet(2, "b"));
        assert_eq!(names(&store), vec!["a", "b"]);
    }

    #[test]
    fn append_with_existing_id_replaces() {
        let mut store = ListStore::from_server(vec![pet(1, "a"), pet(2, "b")]);
        store.append(pet(1, "again"));
        assert_eq!(names(&store), vec!["again", "b"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = ListStore::from_server(vec![pet(1, "a"), pet(2, "b"), pet(3, "c")]);
        assert!(store.replace(2, pet(2, "B")));
        assert_eq!(names(&store), vec!["a", "B", "c"]);
    }

    #[test]
    fn replace_unknown_id_is_noop() {
        let mut store = ListStore::from_server(vec![pet(1, "a")]);
        assert!(!store.replace(9, pet(9, "x")));
        assert_eq!(names(&store), vec!["a"]);
    }

    #[test]
    fn replace_with_colliding_id_keeps_ids_unique() {
        let mut store = ListStore::from_server(vec![pet(1, "a"), pet(2, "b"), pet(3, "c")]);
        assert!(store.replace(3, pet(1, "moved")));
        assert_eq!(names(&store), vec!["b", "moved"]);
        assert_eq!(store.get(1).map(|p| p.name.as_str()), Some("moved"));
    }

    #[test]
    fn remove_by_id_regardless_of_order() {
        let mut store = ListStore::from_server(vec![pet(2, "b"), pet(1, "a")]);
        assert_eq!(store.remove(1).map(|p| p.id), Some(1));
        assert_eq!(names(&store), vec!["b"]);
        assert!(store.remove(1).is_none());
    }
}
