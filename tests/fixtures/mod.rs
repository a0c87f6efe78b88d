//! Test fixtures and sample data shared by the integration tests.

#![allow(dead_code)]

use contact_directory::{Contact, EmailAddress, PhoneNumber};

/// A contact with just a name and surname.
pub fn sample_contact(name: &str, surname: &str) -> Contact {
    Contact::new(name, surname, vec![], vec![]).unwrap()
}

/// A contact with every phone and email slot given explicitly.
pub fn full_contact(name: &str, surname: &str, phones: [&str; 3], emails: [&str; 3]) -> Contact {
    Contact::new(
        name,
        surname,
        phones.into_iter().map(PhoneNumber::new).collect(),
        emails.into_iter().map(EmailAddress::new).collect(),
    )
    .unwrap()
}

/// The eight persisted fields of a contact, padding missing slots with "".
pub fn row_tuple(contact: &Contact) -> Vec<String> {
    let mut fields = vec![contact.name().to_string(), contact.surname().to_string()];
    for i in 0..3 {
        fields.push(
            contact
                .phones()
                .get(i)
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
        );
    }
    for i in 0..3 {
        fields.push(
            contact
                .emails()
                .get(i)
                .map(|e| e.as_str().to_string())
                .unwrap_or_default(),
        );
    }
    fields
}

/// (surname, name) pairs in the order given.
pub fn surname_name(contacts: &[Contact]) -> Vec<(String, String)> {
    contacts
        .iter()
        .map(|c| (c.surname().to_string(), c.name().to_string()))
        .collect()
}

/// Whether `contacts` is in canonical (surname, name) order.
pub fn is_canonically_sorted(contacts: &[Contact]) -> bool {
    contacts
        .windows(2)
        .all(|w| w[0].canonical_cmp(&w[1]) != std::cmp::Ordering::Greater)
}

/// A small, varied directory population.
pub fn sample_people() -> Vec<Contact> {
    vec![
        full_contact("Mario", "Rossi", ["333 1234567", "", ""], ["mario.rossi@example.it", "", ""]),
        full_contact("anna", "bianchi", ["", "081 555 0101", ""], ["", "anna@bianchi.org", ""]),
        full_contact("Luca", "Verdi", ["+39 06 999", "340 000", "347 111"], ["", "", ""]),
        full_contact("Giulia", "rossi", ["", "", ""], ["giulia@rossi.net", "gr@work.com", ""]),
        sample_contact("Zeno", ""),
        sample_contact("", "Esposito"),
    ]
}
