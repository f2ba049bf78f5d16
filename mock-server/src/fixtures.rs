//! In-memory catalog data shaped like the upstream's JSON.
//!
//! Kept as raw `serde_json::Value`s rather than shared types so the core's
//! DTOs are checked against an independent description of the wire format.

use serde_json::{json, Value};

const API: &str = "https://rickandmortyapi.com/api";

fn location_ref(id: Option<i64>, name: &str) -> Value {
    let url = id.map(|id| format!("{API}/location/{id}")).unwrap_or_default();
    json!({ "name": name, "url": url })
}

#[allow(clippy::too_many_arguments)]
fn character(
    id: i64,
    name: &str,
    status: &str,
    species: &str,
    kind: &str,
    gender: &str,
    origin: Value,
    location: Value,
    episodes: &[i64],
) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": species,
        "type": kind,
        "gender": gender,
        "origin": origin,
        "location": location,
        "image": format!("{API}/character/avatar/{id}.jpeg"),
        "episode": episodes.iter().map(|e| format!("{API}/episode/{e}")).collect::<Vec<_>>(),
        "url": format!("{API}/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z",
    })
}

fn location(id: i64, name: &str, kind: &str, dimension: &str, residents: &[i64]) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "dimension": dimension,
        "residents": residents.iter().map(|c| format!("{API}/character/{c}")).collect::<Vec<_>>(),
        "url": format!("{API}/location/{id}"),
        "created": "2017-11-10T12:42:04.162Z",
    })
}

fn episode(id: i64, name: &str, air_date: &str, code: &str, characters: &[i64]) -> Value {
    json!({
        "id": id,
        "name": name,
        "air_date": air_date,
        "episode": code,
        "characters": characters.iter().map(|c| format!("{API}/character/{c}")).collect::<Vec<_>>(),
        "url": format!("{API}/episode/{id}"),
        "created": "2017-11-10T12:56:33.798Z",
    })
}

pub fn characters() -> Vec<Value> {
    let earth = || location_ref(Some(1), "Earth (C-137)");
    let citadel = || location_ref(Some(3), "Citadel of Ricks");
    let replacement = || location_ref(Some(20), "Earth (Replacement Dimension)");
    let unknown = || location_ref(None, "unknown");

    vec![
        character(1, "Rick Sanchez", "Alive", "Human", "", "Male", earth(), citadel(), &[1, 2, 3, 28]),
        character(2, "Morty Smith", "Alive", "Human", "", "Male", unknown(), citadel(), &[1, 2, 3, 28]),
        character(3, "Summer Smith", "Alive", "Human", "", "Female", replacement(), replacement(), &[28]),
        character(4, "Beth Smith", "Alive", "Human", "", "Female", replacement(), replacement(), &[1]),
        character(5, "Jerry Smith", "Alive", "Human", "", "Male", replacement(), replacement(), &[2]),
        character(
            6,
            "Abadango Cluster Princess",
            "Alive",
            "Alien",
            "",
            "Female",
            location_ref(Some(2), "Abadango"),
            location_ref(Some(2), "Abadango"),
            &[28],
        ),
        character(
            7,
            "Abradolf Lincler",
            "unknown",
            "Human",
            "Genetic experiment",
            "Male",
            replacement(),
            location_ref(Some(21), "Testicle Monster Dimension"),
            &[2],
        ),
        character(8, "Adjudicator Rick", "Dead", "Human", "", "Male", unknown(), citadel(), &[28]),
    ]
}

pub fn locations() -> Vec<Value> {
    vec![
        location(1, "Earth (C-137)", "Planet", "Dimension C-137", &[]),
        location(2, "Abadango", "Cluster", "unknown", &[6]),
        location(3, "Citadel of Ricks", "Space station", "unknown", &[1, 2, 8]),
        location(20, "Earth (Replacement Dimension)", "Planet", "Replacement Dimension", &[3, 4, 5]),
        location(21, "Testicle Monster Dimension", "Dimension", "Testicle Monster Dimension", &[7]),
    ]
}

pub fn episodes() -> Vec<Value> {
    vec![
        episode(1, "Pilot", "December 2, 2013", "S01E01", &[1, 2, 4]),
        episode(2, "Lawnmower Dog", "December 9, 2013", "S01E02", &[1, 2, 5, 7]),
        episode(3, "Anatomy Park", "December 16, 2013", "S01E03", &[1, 2]),
        episode(28, "The Ricklantis Mixup", "September 10, 2017", "S03E07", &[1, 2, 3, 6, 8]),
    ]
}
