//! Snapshots sourced from typed Rust structs via serde.

use databag::DataBag;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Contact {
    email: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Profile {
    name: String,
    city: String,
    contacts: Vec<Contact>,
    newsletter: bool,
}

fn profile() -> Profile {
    Profile {
        name: "Anna".to_string(),
        city: "Stockholm".to_string(),
        contacts: vec![Contact {
            email: "anna@example.com".to_string(),
        }],
        newsletter: false,
    }
}

#[test]
fn struct_snapshots_load_and_edit() {
    let snapshot = serde_json::to_value(profile()).unwrap();
    let mut bag = DataBag::with_initial_data(snapshot).unwrap();

    assert_eq!(
        bag.current_value("contacts.0.email"),
        Some(json!("anna@example.com"))
    );

    bag.set_value("city", json!("Uppsala")).unwrap();
    let second = Contact {
        email: "b@x.com".to_string(),
    };
    bag.set_value("contacts.1", serde_json::to_value(second).unwrap())
        .unwrap();

    assert_eq!(
        bag.current_data(),
        json!({
            "name": "Anna",
            "city": "Uppsala",
            "contacts": [{"email": "anna@example.com"}, {"email": "b@x.com"}],
            "newsletter": false
        })
    );
}

#[test]
fn merged_documents_deserialize_back_into_the_struct() {
    let snapshot = serde_json::to_value(profile()).unwrap();
    let mut bag = DataBag::with_initial_data(snapshot).unwrap();
    bag.set_value("city", json!("Uppsala")).unwrap();

    let merged: Profile = serde_json::from_value(bag.current_data()).unwrap();
    assert_eq!(merged.city, "Uppsala");
    assert_eq!(merged.name, "Anna");
    assert_eq!(merged.contacts, profile().contacts);
}

#[test]
fn struct_field_order_survives_the_store() {
    let snapshot = serde_json::to_value(profile()).unwrap();
    let mut bag = DataBag::with_initial_data(snapshot).unwrap();
    bag.set_value("newsletter", json!(true)).unwrap();

    let out = serde_json::to_string(&bag.current_data()).unwrap();
    let name = out.find("\"name\"").unwrap();
    let city = out.find("\"city\"").unwrap();
    let newsletter = out.find("\"newsletter\"").unwrap();
    assert!(name < city && city < newsletter);
}

#[test]
fn non_mapping_serializations_are_rejected() {
    let list = serde_json::to_value(vec![1, 2]).unwrap();
    assert!(DataBag::with_initial_data(list).is_err());
    let scalar = serde_json::to_value("id").unwrap();
    assert!(DataBag::with_initial_data(scalar).is_err());
}
