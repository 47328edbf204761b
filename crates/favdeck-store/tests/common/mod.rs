#![allow(dead_code)]

use favdeck_core::domain::{
    Contact, ContactId, ContactName, ContactSnapshot, Coordinates, DateOfBirth, Location, Picture,
    Postcode, Street, TimezoneInfo,
};

pub fn contact(id: &str, first: &str, last: &str) -> Contact {
    Contact {
        id: ContactId::new(id).expect("contact id"),
        name: ContactName {
            first: first.to_string(),
            last: last.to_string(),
        },
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "555-0100".to_string(),
        picture: Picture {
            large: format!("https://img.example.com/large/{id}.jpg"),
            medium: format!("https://img.example.com/med/{id}.jpg"),
            thumbnail: format!("https://img.example.com/thumb/{id}.jpg"),
        },
        dob: Some(DateOfBirth {
            date: "1985-06-12T08:14:01.000Z".to_string(),
            age: 39,
        }),
        location: Some(Location {
            street: Street {
                number: 42,
                name: "Marsh Lane".to_string(),
            },
            city: "Wolverhampton".to_string(),
            state: "Staffordshire".to_string(),
            country: "United Kingdom".to_string(),
            postcode: Postcode::Text("WV1 1AA".to_string()),
            coordinates: Coordinates {
                latitude: "52.5862".to_string(),
                longitude: "-2.1288".to_string(),
            },
            timezone: TimezoneInfo {
                offset: "+0:00".to_string(),
                description: "Western Europe Time, London, Lisbon, Casablanca".to_string(),
            },
        }),
    }
}

pub fn snapshot(id: &str, first: &str, last: &str) -> ContactSnapshot {
    ContactSnapshot::from(&contact(id, first, last))
}

pub fn id(raw: &str) -> ContactId {
    ContactId::new(raw).expect("contact id")
}
