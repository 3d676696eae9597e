//! Pet records as exchanged with the inventory API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier. Never generated client-side.
pub type PetId = i64;

/// A pet record as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub gender: String,
    /// Image URL.
    pub image: String,
    pub description: String,
    pub price: f64,
}

/// A pet without an identifier: the body of a create request and the
/// contents of the form while composing or editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDraft {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub gender: String,
    pub image: String,
    pub description: String,
    pub price: f64,
}

impl Default for PetDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: String::new(),
            breed: String::new(),
            gender: String::new(),
            image: String::new(),
            description: String::new(),
            price: 0.0,
        }
    }
}

impl PetDraft {
    /// Attach an identifier, producing the full record sent on update.
    pub fn with_id(&self, id: PetId) -> Pet {
        Pet {
            id,
            name: self.name.clone(),
            species: self.species.clone(),
            breed: self.breed.clone(),
            gender: self.gender.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }

    /// Text value of a field. Price is rendered with `format_price`.
    pub fn text(&self, field: PetField) -> String {
        match field {
            PetField::Name => self.name.clone(),
            PetField::Species => self.species.clone(),
            PetField::Breed => self.breed.clone(),
            PetField::Gender => self.gender.clone(),
            PetField::Image => self.image.clone(),
            PetField::Description => self.description.clone(),
            PetField::Price => format_price(self.price),
        }
    }

    /// Store `value` into `field`. Price is parsed, everything else is raw text.
    pub fn set(&mut self, field: PetField, value: &str) {
        match field {
            PetField::Name => self.name = value.to_string(),
            PetField::Species => self.species = value.to_string(),
            PetField::Breed => self.breed = value.to_string(),
            PetField::Gender => self.gender = value.to_string(),
            PetField::Image => self.image = value.to_string(),
            PetField::Description => self.description = value.to_string(),
            PetField::Price => self.price = parse_price(value),
        }
    }

    /// Fields that would fail a required-field check, in form order.
    pub fn missing_fields(&self) -> Vec<PetField> {
        PetField::ALL
            .into_iter()
            .filter(|field| match field {
                PetField::Price => self.price.is_nan(),
                other => self.text(*other).is_empty(),
            })
            .collect()
    }
}

impl From<&Pet> for PetDraft {
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            species: pet.species.clone(),
            breed: pet.breed.clone(),
            gender: pet.gender.clone(),
            image: pet.image.clone(),
            description: pet.description.clone(),
            price: pet.price,
        }
    }
}

/// Editable fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetField {
    Name,
    Species,
    Breed,
    Gender,
    Image,
    Description,
    Price,
}

impl PetField {
    pub const ALL: [PetField; 7] = [
        PetField::Name,
        PetField::Species,
        PetField::Breed,
        PetField::Gender,
        PetField::Image,
        PetField::Description,
        PetField::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PetField::Name => "Name",
            PetField::Species => "Species",
            PetField::Breed => "Breed",
            PetField::Gender => "Gender",
            PetField::Image => "Image URL",
            PetField::Description => "Description",
            PetField::Price => "Price",
        }
    }

    pub fn next(self) -> PetField {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> PetField {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for PetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse price input. Anything that is not a finite number becomes NaN.
pub fn parse_price(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

/// Render a price the way it was most likely typed: `150`, not `150.0`.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        String::new()
    } else {
        format!("{}", price)
    }
}
