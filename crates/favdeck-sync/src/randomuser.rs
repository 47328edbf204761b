use crate::source::{ContactSource, FetchReport};
use crate::{Result, SyncError};
use favdeck_core::domain::{Contact, ContactId, ContactName, DateOfBirth, Location, Picture};
use serde::Deserialize;
use serde_json::Value;

pub const INCLUDED_FIELDS: &str = "name,email,phone,picture,login,dob,location";

#[derive(Debug, Deserialize)]
struct ResponseBody {
    results: Option<Vec<Value>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    login: Option<RawLogin>,
    name: ContactName,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    picture: Picture,
    dob: Option<DateOfBirth>,
    location: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawLogin {
    uuid: Option<String>,
}

pub fn parse_random_user_response(body: &str) -> Result<FetchReport> {
    let parsed: ResponseBody =
        serde_json::from_str(body).map_err(|err| SyncError::Parse(err.to_string()))?;
    if let Some(message) = parsed.error {
        return Err(SyncError::Parse(format!("source returned error: {message}")));
    }
    let results = parsed
        .results
        .ok_or_else(|| SyncError::Parse("response is missing results".to_string()))?;

    let mut report = FetchReport::default();
    for (index, entry) in results.into_iter().enumerate() {
        match contact_from_entry(entry) {
            Ok((contact, warning)) => {
                if let Some(warning) = warning {
                    report.warnings.push(format!("entry {index}: {warning}"));
                }
                report.contacts.push(contact);
            }
            Err(err) => {
                report.skipped += 1;
                report
                    .warnings
                    .push(format!("skipping entry {index}: {err}"));
            }
        }
    }
    Ok(report)
}

fn contact_from_entry(entry: Value) -> Result<(Contact, Option<String>)> {
    let raw: RawUser =
        serde_json::from_value(entry).map_err(|err| SyncError::Parse(err.to_string()))?;
    let uuid = raw
        .login
        .and_then(|login| login.uuid)
        .ok_or_else(|| SyncError::Parse("missing login.uuid".to_string()))?;
    let id = ContactId::new(&uuid)?;

    let mut warning = None;
    let location = match raw.location {
        Some(value) => match serde_json::from_value::<Location>(value) {
            Ok(location) => Some(location),
            Err(err) => {
                warning = Some(format!("dropping malformed location: {err}"));
                None
            }
        },
        None => None,
    };

    Ok((
        Contact {
            id,
            name: raw.name,
            email: raw.email,
            phone: raw.phone,
            picture: raw.picture,
            dob: raw.dob,
            location,
        },
        warning,
    ))
}

#[cfg(feature = "remote-fetch")]
mod imp {
    use super::{parse_random_user_response, ContactSource, FetchReport, INCLUDED_FIELDS};
    use crate::{Result, SyncError};
    use reqwest::blocking::Client;
    use std::time::Duration;
    use url::{Host, Url};

    #[derive(Debug, Clone)]
    pub struct RandomUserSource {
        base_url: String,
        results: u32,
        user_agent: Option<String>,
    }

    impl RandomUserSource {
        pub fn new(base_url: String, results: u32, user_agent: Option<String>) -> Self {
            Self {
                base_url,
                results,
                user_agent,
            }
        }
    }

    impl ContactSource for RandomUserSource {
        fn source_name(&self) -> &'static str {
            "randomuser"
        }

        fn fetch_contacts(&self) -> Result<FetchReport> {
            fetch_random_users(&self.base_url, self.results, self.user_agent.as_deref())
        }
    }

    pub fn build_request_url(base_url: &str, results: u32) -> Result<Url> {
        let mut url = Url::parse(base_url)?;
        if url.scheme() != "https" && !is_loopback(&url) {
            return Err(SyncError::Parse("source url must use https".to_string()));
        }
        url.query_pairs_mut()
            .append_pair("results", &results.to_string())
            .append_pair("inc", INCLUDED_FIELDS);
        Ok(url)
    }

    pub fn fetch_random_users(
        base_url: &str,
        results: u32,
        user_agent: Option<&str>,
    ) -> Result<FetchReport> {
        let url = build_request_url(base_url, results)?;
        let client = Client::builder()
            .user_agent(user_agent.unwrap_or("favdeck"))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let response = client
            .get(url)
            .header("Accept", "application/json")
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        parse_random_user_response(&body)
    }

    fn is_loopback(url: &Url) -> bool {
        match url.host() {
            Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(addr)) => addr.is_loopback(),
            Some(Host::Ipv6(addr)) => addr.is_loopback(),
            None => false,
        }
    }

}

#[cfg(not(feature = "remote-fetch"))]
mod imp {
    use super::{ContactSource, FetchReport};
    use crate::{Result, SyncError};

    #[derive(Debug, Clone)]
    pub struct RandomUserSource {
        base_url: String,
        results: u32,
        user_agent: Option<String>,
    }

    impl RandomUserSource {
        pub fn new(base_url: String, results: u32, user_agent: Option<String>) -> Self {
            Self {
                base_url,
                results,
                user_agent,
            }
        }
    }

    impl ContactSource for RandomUserSource {
        fn source_name(&self) -> &'static str {
            "randomuser"
        }

        fn fetch_contacts(&self) -> Result<FetchReport> {
            let _ = (&self.base_url, self.results, &self.user_agent);
            Err(SyncError::Unavailable(
                "remote fetch disabled; rebuild with the remote-fetch feature".to_string(),
            ))
        }
    }
}

pub use imp::*;
