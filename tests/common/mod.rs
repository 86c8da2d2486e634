//! Shared fixtures for contact-graph integration tests
//!
//! Builds connections CSV text the way exports look, either row by row or
//! as a seeded random corpus.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const HEADER: &str = "First Name,Last Name,URL,Email Address,Company,Position,Connected On";

const FIRST_NAMES: &[&str] = &[
    "Michael", "Sarah", "Raj", "Priya", "Chen", "Maria", "Ahmed", "Ingrid", "Paolo", "Yuki", "",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Nguyen", "Garcia", "Okafor", "Lee", "Kowalski", "Brooks", "Fitzgerald-Hayes", "",
];
const COMPANIES: &[&str] = &["Google", "Acme Corp", "Globex", "Initech", "Stripe", "", "Meta"];
const POSITIONS: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Engineering Manager",
    "Product Manager",
    "Recruiter",
    "",
];
const MONTHS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One CSV row, columns in export order
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub first: String,
    pub last: String,
    pub url: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub connected_on: String,
}

impl Row {
    pub fn named(first: &str, last: &str) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            ..Default::default()
        }
    }

    pub fn company(mut self, company: &str) -> Self {
        self.company = company.into();
        self
    }

    pub fn position(mut self, position: &str) -> Self {
        self.position = position.into();
        self
    }

    pub fn connected_on(mut self, date: &str) -> Self {
        self.connected_on = date.into();
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    fn to_csv_line(&self) -> String {
        [
            &self.first,
            &self.last,
            &self.url,
            &self.email,
            &self.company,
            &self.position,
            &self.connected_on,
        ]
        .iter()
        .map(|cell| quote(cell))
        .collect::<Vec<_>>()
        .join(",")
    }
}

fn quote(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// CSV text for the given rows, with the export header
pub fn csv_text(rows: &[Row]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(&row.to_csv_line());
        text.push('\n');
    }
    text
}

/// Random rows, including nameless ones and missing fields
pub fn random_rows(seed: u64, count: usize) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let first = *FIRST_NAMES.choose(&mut rng).unwrap_or(&"");
            let last = *LAST_NAMES.choose(&mut rng).unwrap_or(&"");
            let handle = format!("{}{}", first, last).to_lowercase();
            let date = format!(
                "{:02} {} {}",
                rng.gen_range(1..=28),
                MONTHS.choose(&mut rng).unwrap_or(&"Jan"),
                rng.gen_range(2010..=2025)
            );
            Row {
                first: first.into(),
                last: last.into(),
                url: if handle.is_empty() || rng.gen_bool(0.2) {
                    String::new()
                } else {
                    format!("https://www.linkedin.com/in/{}", handle)
                },
                email: if rng.gen_bool(0.1) {
                    format!("{}@example.com", handle)
                } else {
                    String::new()
                },
                company: COMPANIES.choose(&mut rng).unwrap_or(&"").to_string(),
                position: POSITIONS.choose(&mut rng).unwrap_or(&"").to_string(),
                connected_on: if rng.gen_bool(0.9) { date } else { String::new() },
            }
        })
        .collect()
}

/// Query terms drawn from the same vocabulary as the random rows
pub fn random_terms(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pool: Vec<&str> = FIRST_NAMES
        .iter()
        .chain(LAST_NAMES)
        .chain(COMPANIES)
        .chain(POSITIONS)
        .chain(MONTHS)
        .copied()
        .chain(["eng", "2019", "ACME", "  manager ", "zzz-none", "a"])
        .collect();
    (0..count)
        .map(|_| {
            let term: &str = pool.choose(&mut rng).copied().unwrap_or("");
            // Sometimes cut a term down to a substring
            if term.len() > 3 && rng.gen_bool(0.3) {
                term[..term.len() / 2].to_string()
            } else {
                term.to_string()
            }
        })
        .collect()
}
