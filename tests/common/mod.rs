//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use petstore::client::HttpPetClient;
use petstore::config::ApiConfig;
use petstore::inventory::Inventory;
use petstore::pet::{Pet, PetDraft, PetField};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL that refuses connections.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}/david/pets", free_port())
}

pub fn client_for(base_url: &str) -> HttpPetClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        request_timeout_seconds: Some(5),
    };
    HttpPetClient::new(&config).expect("Failed to build client")
}

pub fn inventory_for(base_url: &str) -> Inventory<HttpPetClient> {
    Inventory::new(client_for(base_url))
}

pub fn pet(id: i64, name: &str, species: &str, breed: &str) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        species: species.to_string(),
        breed: breed.to_string(),
        gender: "F".to_string(),
        image: format!("https://img.example/{}.png", id),
        description: format!("{} the {}", name, breed),
        price: 100.0 + id as f64,
    }
}

/// Three pets in a fixed server order.
pub fn sample_pets() -> Vec<Pet> {
    vec![
        pet(3, "Nemo", "Fish", "Clownfish"),
        pet(1, "Tom", "Cat", "Siamese"),
        pet(2, "Bella", "Dog", "Beagle"),
    ]
}

/// Form input for the canonical create example, as typed.
pub fn rex_fields() -> Vec<(PetField, &'static str)> {
    vec![
        (PetField::Name, "Rex"),
        (PetField::Species, "Dog"),
        (PetField::Breed, "Lab"),
        (PetField::Gender, "M"),
        (PetField::Image, "u"),
        (PetField::Description, "friendly"),
        (PetField::Price, "150"),
    ]
}

pub fn rex_draft() -> PetDraft {
    let mut draft = PetDraft::default();
    for (field, value) in rex_fields() {
        draft.set(field, value);
    }
    draft
}

/// Write a config file and return its directory guard and path.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
