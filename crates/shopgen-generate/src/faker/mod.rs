//! Thin adapter over the `fake` crate's English fakers.
//!
//! Every value is drawn from the caller's RNG so output stays seed-determined.

use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateAbbr, StreetName, ZipCode,
};
use fake::faker::company::en::CatchPhrase;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    PhoneNumber().fake_with_rng(rng)
}

pub fn country<R: Rng + ?Sized>(rng: &mut R) -> String {
    CountryName().fake_with_rng(rng)
}

pub fn catch_phrase<R: Rng + ?Sized>(rng: &mut R) -> String {
    CatchPhrase().fake_with_rng(rng)
}

/// Single-line postal address: `<number> <street>, <city>, <state> <zip>`.
pub fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateAbbr().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{number} {street}, {city}, {state} {zip}")
}
