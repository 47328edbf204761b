use crate::domain::Contact;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSearch {
    raw: String,
    lowered: String,
}

impl ContactSearch {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lowered: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    // Name and email compare case-insensitively; phone compares verbatim.
    pub fn matches(&self, contact: &Contact) -> bool {
        if self.is_empty() {
            return true;
        }

        let name = format!("{} {}", contact.name.first, contact.name.last).to_lowercase();
        name.contains(&self.lowered)
            || contact.email.to_lowercase().contains(&self.lowered)
            || (!contact.phone.is_empty() && contact.phone.contains(&self.raw))
    }
}

impl Default for ContactSearch {
    fn default() -> Self {
        Self::new("")
    }
}

pub fn filter_contacts<'a>(contacts: &'a [Contact], search: &ContactSearch) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|contact| search.matches(contact))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_contacts, ContactSearch};
    use crate::domain::{Contact, ContactId, ContactName, Picture};

    fn contact(id: &str, first: &str, last: &str, email: &str, phone: &str) -> Contact {
        Contact {
            id: ContactId::new(id).unwrap(),
            name: ContactName {
                first: first.to_string(),
                last: last.to_string(),
            },
            email: email.to_string(),
            phone: phone.to_string(),
            picture: Picture::default(),
            dob: None,
            location: None,
        }
    }

    fn sample() -> Vec<Contact> {
        vec![
            contact("1", "Ada", "Lovelace", "ada@example.com", "(555) 010-0001"),
            contact("2", "Grace", "Hopper", "GRACE@navy.mil", "555-0102"),
            contact("3", "Alan", "Turing", "alan@example.org", ""),
        ]
    }

    #[test]
    fn blank_query_matches_everything() {
        let contacts = sample();
        assert_eq!(filter_contacts(&contacts, &ContactSearch::new("   ")).len(), 3);
        assert_eq!(filter_contacts(&contacts, &ContactSearch::default()).len(), 3);
    }

    #[test]
    fn full_name_match_is_case_insensitive() {
        let contacts = sample();
        let hits = filter_contacts(&contacts, &ContactSearch::new("ADA LOVE"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "1");
    }

    #[test]
    fn email_match_is_case_insensitive() {
        let contacts = sample();
        let hits = filter_contacts(&contacts, &ContactSearch::new("navy.MIL"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "2");
    }

    #[test]
    fn phone_match_uses_raw_query() {
        let contacts = sample();
        let hits = filter_contacts(&contacts, &ContactSearch::new("010-0001"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "1");
    }

    #[test]
    fn filter_preserves_input_order() {
        let contacts = sample();
        let hits = filter_contacts(&contacts, &ContactSearch::new("example"));
        let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
