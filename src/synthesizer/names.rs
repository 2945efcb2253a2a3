use rand::Rng;

pub const MERCHANTS: [&str; 10] = [
    "Amazon", "Walmart", "Starbucks", "Shell Gas", "Netflix",
    "Spotify", "Uber", "Restaurant", "Supermarket", "Pharmacy"
];

const FIRST_NAMES: [&str; 16] = [
    "Olivia", "James", "Amelia", "Noah", "Isla", "Oliver", "Ava", "George",
    "Mia", "Arthur", "Sophia", "Leo", "Grace", "Harry", "Freya", "Jack"
];

const LAST_NAMES: [&str; 16] = [
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies",
    "Patel", "Robinson", "Wright", "Thompson", "Evans", "Walker", "White", "Roberts"
];

const COMPANY_STEMS: [&str; 12] = [
    "Northwind", "Bluewater", "Ironbridge", "Summit", "Redwood", "Harbour",
    "Keystone", "Silverline", "Oakfield", "Brightpath", "Westgate", "Pinecrest"
];

const COMPANY_SUFFIXES: [&str; 6] = ["Ltd", "PLC", "Group", "Holdings", "& Co", "Partners"];

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

pub fn merchant<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, &MERCHANTS)
}

pub fn person_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES))
}

pub fn company_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, &COMPANY_STEMS), pick(rng, &COMPANY_SUFFIXES))
}
