//! Synthetic connections files
//!
//! Produces a plausible export for a software engineer connecting from 2010
//! onwards: monthly volume follows a per-year velocity table, employers are
//! drawn from era-weighted company pools and titles grow with experience.
//! The output uses the same header and date format as a real export, so it
//! loads like one.

use crate::graph::build_graph;
use crate::import::{Column, Record};
use crate::query::ViewStats;
use chrono::{Datelike, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Date format of the Connected On column, e.g. `01 Dec 2025`
pub const DATE_FORMAT: &str = "%d %b %Y";

/// File name real exports use
pub const DEFAULT_FILE_NAME: &str = "Connections.csv";

/// Year the generated career starts
pub const FIRST_YEAR: i32 = 2010;

/// Number of companies listed in a report
const TOP_COMPANIES: usize = 5;

const FIRST_NAMES: &[&str] = &[
    "Michael", "David", "John", "James", "Robert", "Daniel", "Matthew", "Christopher", "Andrew",
    "Joshua", "Ryan", "Brian", "Kevin", "Thomas", "Justin", "Brandon", "Eric", "Steven",
    "Alexander", "Jonathan", "Nicholas", "Anthony", "Adam", "Mark", "Jason", "Paul", "Benjamin",
    "Samuel", "Nathan", "Jacob", "Tyler", "Aaron", "Kyle", "Sean", "Patrick", "Dylan", "Jordan",
    "Luke", "Connor", "Ethan", "Sarah", "Jennifer", "Emily", "Jessica", "Ashley", "Amanda",
    "Rachel", "Michelle", "Stephanie", "Lauren", "Elizabeth", "Nicole", "Rebecca", "Megan",
    "Samantha", "Katherine", "Alexandra", "Laura", "Natalie", "Hannah", "Olivia", "Emma",
    "Sophia", "Isabella", "Ava", "Abigail", "Madison", "Grace", "Victoria", "Lily", "Chloe",
    "Sophie", "Anna", "Claire", "Julia", "Caroline", "Maya", "Zoe", "Lucy", "Elena", "Yuki",
    "Raj", "Priya", "Chen", "Wei", "Maria", "Carlos", "Ahmed", "Fatima", "Ivan", "Dmitri",
    "Anastasia", "Pierre", "Amelie", "Hans", "Ingrid", "Paolo",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson",
    "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell", "Carter",
    "Roberts", "Phillips", "Evans", "Turner", "Collins", "Edwards", "Stewart", "Morris",
    "Murphy", "Cook", "Rogers", "Peterson", "Cooper", "Reed", "Bailey", "Bell", "Gomez", "Kelly",
    "Howard", "Ward", "Cox", "Diaz", "Richardson", "Wood", "Watson", "Brooks", "Bennett", "Gray",
    "James", "Reyes", "Cruz", "Hughes", "Price", "Myers", "Long",
];

const FAANG: &[&str] = &["Google", "Meta", "Amazon", "Netflix", "Apple", "Microsoft"];

const BIG_TECH: &[&str] = &[
    "IBM", "Oracle", "Salesforce", "Adobe", "Intel", "Cisco", "VMware", "Dell Technologies",
    "HP Enterprise", "SAP", "Accenture",
];

const UNICORNS: &[&str] = &[
    "Stripe", "Databricks", "SpaceX", "Airbnb", "Uber", "Lyft", "DoorDash", "Instacart",
    "Robinhood", "Coinbase", "Discord", "Figma", "Notion", "Snowflake", "Datadog", "HashiCorp",
    "GitLab", "Confluent",
];

const MID_STAGE: &[&str] = &[
    "Atlassian", "Twilio", "Zoom", "Slack", "Dropbox", "Box", "Okta", "Auth0", "Elastic",
    "MongoDB", "Redis", "PagerDuty", "Splunk", "New Relic", "Sentry", "LaunchDarkly", "Segment",
];

const STARTUPS: &[&str] = &[
    "ScaleOps", "Forter", "Fireblocks", "Wiz", "Snyk", "monday.com", "Fiverr", "Lemonade",
    "Riskified", "Resident", "Vimeo", "Plaid", "Chime", "Affirm", "Brex", "Ramp", "Mercury",
    "Airtable", "Webflow",
];

const CONSULTING: &[&str] = &[
    "Deloitte Digital", "Accenture", "McKinsey Digital", "BCG Digital Ventures", "Thoughtworks",
    "Cognizant", "Infosys", "Wipro", "TCS",
];

// Bigger before 2015
const EARLY_ERA: &[&str] = &[
    "Yahoo", "AOL", "Nokia", "BlackBerry", "Motorola", "Sun Microsystems", "MySpace",
    "Friendster", "Digg", "StumbleUpon",
];

const JUNIOR_TITLES: &[&str] = &[
    "Software Engineer", "Junior Software Engineer", "Associate Software Engineer",
    "Software Developer", "Junior Developer", "Web Developer", "Frontend Developer",
    "Backend Developer", "Full Stack Developer",
];

const MID_TITLES: &[&str] = &[
    "Software Engineer", "Software Engineer II", "Software Developer", "Backend Engineer",
    "Frontend Engineer", "Full Stack Engineer", "Platform Engineer", "Systems Engineer",
    "DevOps Engineer",
];

const SENIOR_TITLES: &[&str] = &[
    "Senior Software Engineer", "Senior Backend Engineer", "Senior Frontend Engineer",
    "Senior Full Stack Engineer", "Lead Software Engineer", "Principal Engineer",
    "Staff Engineer", "Senior Platform Engineer", "Senior DevOps Engineer",
];

const LEAD_TITLES: &[&str] = &[
    "Tech Lead", "Engineering Lead", "Lead Engineer", "Principal Engineer", "Staff Engineer",
    "Senior Staff Engineer", "Distinguished Engineer", "Engineering Manager",
    "Senior Engineering Manager",
];

const EXECUTIVE_TITLES: &[&str] = &[
    "Director of Engineering", "Senior Director of Engineering", "VP of Engineering",
    "SVP of Engineering", "CTO", "Chief Technology Officer", "Head of Engineering",
    "VP of Product Engineering",
];

/// New connections per month, as an inclusive range, by year
const VELOCITY: &[(i32, u32, u32)] = &[
    (2010, 2, 5),
    (2011, 3, 7),
    (2012, 4, 7),
    (2013, 5, 9),
    (2014, 5, 10),
    (2015, 6, 12),
    (2016, 7, 14),
    (2017, 8, 16),
    (2018, 9, 18),
    (2019, 9, 18),
    (2020, 6, 13),
    (2021, 8, 15),
    (2022, 9, 17),
    (2023, 10, 18),
    (2024, 8, 15),
    (2025, 6, 12),
];

const DEFAULT_VELOCITY: (u32, u32) = (4, 10);

/// Errors that can occur while writing a sample file
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sample writing
pub type SampleResult<T> = Result<T, SampleError>;

/// Monthly connection range for a year
pub fn monthly_velocity(year: i32) -> (u32, u32) {
    VELOCITY
        .iter()
        .find(|(y, _, _)| *y == year)
        .map(|&(_, low, high)| (low, high))
        .unwrap_or(DEFAULT_VELOCITY)
}

/// Last connection date when none is given
pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 5).unwrap_or(NaiveDate::MAX)
}

fn career_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(FIRST_YEAR, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn pick(rng: &mut StdRng, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or("")
}

/// Seeded generator of connection records
///
/// ```
/// use contact_graph::sample::SampleGenerator;
/// use chrono::NaiveDate;
///
/// let end = NaiveDate::from_ymd_opt(2010, 3, 31).unwrap();
/// let first = SampleGenerator::new(Some(1)).with_end(end).generate();
/// let again = SampleGenerator::new(Some(1)).with_end(end).generate();
/// assert_eq!(first, again);
/// ```
pub struct SampleGenerator {
    rng: StdRng,
    end: NaiveDate,
}

impl SampleGenerator {
    /// A generator with a fixed seed, or seeded from the OS when `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            end: default_end_date(),
        }
    }

    /// Stop generating after `end`
    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = end;
        self
    }

    /// Generate every connection from the start of the career to the end
    /// date, oldest first
    pub fn generate(&mut self) -> Vec<Record> {
        let mut dated: Vec<(NaiveDate, Record)> = Vec::new();
        let mut month = career_start();

        while month <= self.end {
            let (low, high) = monthly_velocity(month.year());
            let count = self.rng.gen_range(low..=high);
            for _ in 0..count {
                let day = self.rng.gen_range(1..=28);
                let Some(date) = NaiveDate::from_ymd_opt(month.year(), month.month(), day) else {
                    continue;
                };
                if date > self.end {
                    break;
                }
                dated.push((date, self.contact(date)));
            }
            let Some(next) = month.checked_add_months(Months::new(1)) else {
                break;
            };
            month = next;
        }

        dated.sort_by_key(|(date, _)| *date);
        tracing::info!(connections = dated.len(), end = %self.end, "generated sample connections");
        dated.into_iter().map(|(_, record)| record).collect()
    }

    fn contact(&mut self, date: NaiveDate) -> Record {
        let first = pick(&mut self.rng, FIRST_NAMES);
        let last = pick(&mut self.rng, LAST_NAMES);
        let year = date.year();
        let company = self.company(year);
        let experience = year - FIRST_YEAR + self.rng.gen_range(0..=10);
        let position = self.position(experience);
        let url = self.profile_url(first, last);

        Record::new()
            .with(Column::FirstName, first)
            .with(Column::LastName, last)
            .with(Column::Url, url)
            .with(Column::Company, company)
            .with(Column::Position, position)
            .with(Column::ConnectedOn, date.format(DATE_FORMAT).to_string())
    }

    fn company(&mut self, year: i32) -> &'static str {
        let early = year < 2015;
        if early && self.rng.gen_bool(0.15) {
            return pick(&mut self.rng, EARLY_ERA);
        }

        let roll: f64 = self.rng.gen();
        let pool = if roll < 0.15 {
            FAANG
        } else if roll < 0.30 {
            BIG_TECH
        } else if roll < 0.50 {
            if early {
                // Unicorns were rare early on
                let index = self.rng.gen_range(0..BIG_TECH.len() + MID_STAGE.len());
                return BIG_TECH
                    .get(index)
                    .or_else(|| MID_STAGE.get(index - BIG_TECH.len()))
                    .copied()
                    .unwrap_or("");
            }
            UNICORNS
        } else if roll < 0.75 {
            MID_STAGE
        } else if roll < 0.90 {
            STARTUPS
        } else {
            CONSULTING
        };
        pick(&mut self.rng, pool)
    }

    fn position(&mut self, experience: i32) -> &'static str {
        let pool = if experience < 3 {
            JUNIOR_TITLES
        } else if experience < 6 {
            MID_TITLES
        } else if experience < 10 {
            SENIOR_TITLES
        } else if experience < 15 || self.rng.gen_bool(0.7) {
            LEAD_TITLES
        } else {
            EXECUTIVE_TITLES
        };
        pick(&mut self.rng, pool)
    }

    fn profile_url(&mut self, first: &str, last: &str) -> String {
        let first = first.to_lowercase();
        let last = last.to_lowercase();
        let initial: String = first.chars().take(1).collect();
        let handle = match self.rng.gen_range(0..5) {
            0 => format!("{}{}", first, last),
            1 => format!("{}-{}", first, last),
            2 => format!("{}{}{}", first, last, self.rng.gen_range(1..=999)),
            3 => format!("{}{}", initial, last),
            _ => format!(
                "{}-{}-{}",
                first,
                last,
                self.rng.gen_range(10_000_000..=99_999_999)
            ),
        };
        format!("https://www.linkedin.com/in/{}", handle)
    }
}

/// Write records as a connections CSV with the export header
pub fn write_csv<W: Write>(records: &[Record], out: W) -> SampleResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(Column::ALL.iter().map(|c| c.header()))?;
    for record in records {
        writer.write_record(Column::ALL.iter().map(|&c| record.get(c)))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records to a file at `path`
pub fn write_file(records: &[Record], path: &Path) -> SampleResult<()> {
    let file = File::create(path)?;
    write_csv(records, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows = records.len(), "wrote sample file");
    Ok(())
}

/// Summary printed after generating a file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleReport {
    /// Contact and company counts of the graph the file loads into
    pub stats: ViewStats,
    /// Connections per year
    pub per_year: BTreeMap<i32, usize>,
    /// Most frequent companies, most connections first
    pub top_companies: Vec<(String, usize)>,
}

impl SampleReport {
    pub fn from_records(records: &[Record]) -> Self {
        let built = build_graph(records);
        let stats = ViewStats::compute(&built.snapshot, &built.snapshot, &built.attributes);

        let mut per_year = BTreeMap::new();
        for record in records {
            if let Ok(date) = NaiveDate::parse_from_str(record.get(Column::ConnectedOn), DATE_FORMAT)
            {
                *per_year.entry(date.year()).or_insert(0) += 1;
            }
        }

        let mut companies: HashMap<&str, usize> = HashMap::new();
        for record in records {
            let company = record.get(Column::Company);
            if !company.is_empty() {
                *companies.entry(company).or_insert(0) += 1;
            }
        }
        let mut top_companies: Vec<(String, usize)> = companies
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        top_companies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_companies.truncate(TOP_COMPANIES);

        Self {
            stats,
            per_year,
            top_companies,
        }
    }

    /// First and last year with connections
    pub fn years(&self) -> Option<(i32, i32)> {
        let first = self.per_year.keys().next()?;
        let last = self.per_year.keys().next_back()?;
        Some((*first, *last))
    }

    /// Mean connections per year that has any
    pub fn average_per_year(&self) -> f64 {
        if self.per_year.is_empty() {
            return 0.0;
        }
        let dated: usize = self.per_year.values().sum();
        dated as f64 / self.per_year.len() as f64
    }
}

impl std::fmt::Display for SampleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Generated {} connections", self.stats.total_contacts)?;
        match self.years() {
            Some((first, last)) => writeln!(f, "Years covered: {} - {}", first, last)?,
            None => writeln!(f, "Years covered: none")?,
        }
        writeln!(f, "Total companies: {}", self.stats.companies)?;
        writeln!(f, "Avg connections/year: {:.1}", self.average_per_year())?;

        writeln!(f, "\nTop {} companies:", TOP_COMPANIES)?;
        for (company, count) in &self.top_companies {
            writeln!(f, "  {}: {} connections", company, count)?;
        }

        writeln!(f, "\nConnections by year:")?;
        for (year, count) in &self.per_year {
            writeln!(f, "  {}: {} connections", year, count)?;
        }
        Ok(())
    }
}
