//! Case-insensitive free-text filter over the list store.

use crate::pet::Pet;

/// True when `query` occurs, ignoring case, in the pet's name, species,
/// breed, gender or description. The empty query matches everything.
pub fn matches(pet: &Pet, query: &str) -> bool {
    let needle = query.to_lowercase();
    [
        &pet.name,
        &pet.species,
        &pet.breed,
        &pet.gender,
        &pet.description,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Pets matching `query`, in store order.
pub fn filter<'a>(pets: &'a [Pet], query: &str) -> Vec<&'a Pet> {
    pets.iter().filter(|pet| matches(pet, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(id: i64, name: &str, species: &str, breed: &str, description: &str) -> Pet {
        Pet {
            id,
            name: name.to_string(),
            species: species.to_string(),
            breed: breed.to_string(),
            gender: "F".to_string(),
            image: "https://img.example/pet.png".to_string(),
            description: description.to_string(),
            price: 10.0,
        }
    }

    fn store() -> Vec<Pet> {
        vec![
            pet(1, "Rex", "Dog", "Labrador", "friendly"),
            pet(2, "Tom", "Cat", "Siamese", "Sleeps all day"),
            pet(3, "Nemo", "Fish", "Clownfish", "orange and white"),
        ]
    }

    fn ids(pets: &[&Pet]) -> Vec<i64> {
        pets.iter().map(|pet| pet.id).collect()
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let pets = store();
        assert_eq!(ids(&filter(&pets, "")), vec![1, 2, 3]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let pets = store();
        assert_eq!(ids(&filter(&pets, "DOG")), vec![1]);
        assert_eq!(ids(&filter(&pets, "siam")), vec![2]);
    }

    #[test]
    fn description_and_gender_are_searched() {
        let pets = store();
        assert_eq!(ids(&filter(&pets, "SLEEPS")), vec![2]);
        assert_eq!(ids(&filter(&pets, "f")), vec![1, 2, 3]);
    }

    #[test]
    fn image_url_is_not_searched() {
        let pets = store();
        assert!(filter(&pets, "img.example").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let pets = store();
        let once: Vec<Pet> = filter(&pets, "o").into_iter().cloned().collect();
        let twice: Vec<Pet> = filter(&once, "o").into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn unicode_is_folded() {
        let pets = vec![pet(9, "ÉCLAIR", "Cat", "Mixed", "")];
        assert_eq!(ids(&filter(&pets, "éclair")), vec![9]);
    }
}
