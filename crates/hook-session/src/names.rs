//! Whimsical session name generation.

use rand::RngExt as _;

/// First names: plain names, titled names, or whole phrases.
pub const FIRST_NAMES: &[&str] = &[
    // Classic
    "Gandalf",
    "Merlin",
    "Scott",
    "Trevor",
    "Kevin",
    "Barry",
    "Nigel",
    "Reginald",
    "Bartholomew",
    "Cornelius",
    "Thaddeus",
    "Mortimer",
    // Titled
    "Mrs. Willoughby",
    "Father Paul Devonly",
    "Dr. Spaceman",
    "Sergeant Pickles",
    "Professor Snugglebottom",
    "Captain Whiskers",
    "Dame Judith",
    "Sir Reginald",
    "Bishop Flanagan",
    "Reverend Chaos",
    "Admiral Biscuits",
    "Colonel Mustard",
    // Pets
    "Snookums",
    "Pudding",
    "Muffin",
    "Waffles",
    "Sprocket",
    "Gizmo",
    "Pebbles",
    "Mr. Fluffington",
    "Princess Thunderpaws",
    "Lord Wigglebottom",
    "Tiny Steve",
    // Dramatic
    "The Dread Lord Abaddon",
    "Xarthok the Defiler",
    "The Unnamed One",
    "Entropy Prime",
    "The Void Walker",
    "Chaos Incarnate",
    "The Final Arbiter",
    // Corporate
    "Chad from Marketing",
    "Brenda in HR",
    "The Scrum Master",
    "That Guy from IT",
    "Regional Manager Dwight",
    "Senior Vice President Jenkins",
    "Intern #47",
    // Absurd
    "A Swarm of Bees",
    "Three Raccoons in a Trenchcoat",
    "The Concept of Thursday",
    "The Stepmother You Never Wanted",
    "An Increasingly Nervous Flamingo",
    "Greg",
];

/// Suffixes grouped by the separator that joins them to the first name.
pub const SUFFIX_GROUPS: &[(&str, &[&str])] = &[
    (
        " ",
        &[
            "the Magnificent",
            "the Terrible",
            "the Unready",
            "the Adequate",
            "the All-Knowing",
            "the Mostly-Knowing",
            "the Occasionally Correct",
            "the Destroyer of Worlds",
            "the Filer of Taxes",
            "the Sender of Emails",
            "the Inevitable",
            "the Procrastinator",
            "the Early-to-Bed",
            "the Devourer",
            "the Snack-Sized",
            "the Family-Sized",
            "the Recursive",
            "the Deprecated",
            "the Legacy Code",
        ],
    ),
    (
        ", ",
        &[
            "Attorney at Law",
            "CPA",
            "PhD",
            "Esq.",
            "MD",
            "Earl of Croix",
            "Duke of URL",
            "Baron of the Spreadsheet",
            "Viscount of the Third Floor",
            "Lord of the Ping",
            "Count of Monte Crisco",
            "Regional Manager",
            "Associate Vice President",
            "Junior Senior Developer",
            "Defender of the Realm",
            "Keeper of the Sacred Changelog",
            "who is running late",
            "who forgot to mute",
            "who meant to reply-all",
            "who's not angry, just disappointed",
        ],
    ),
    (
        "—",
        &[
            "Sexiest Person, 1998-99 (Elevator World Magazine)",
            "Winner, Most Consistent (Participation Magazine)",
            "As Seen on TV's Matlock",
            "Now With 20% More Existential Dread!",
            "Terms and Conditions Apply",
            "Voted 'Most Likely to Defecate Standing'",
            "Certified Pre-Owned",
            "Some Assembly Required",
            "Batteries Not Included",
            "Your Mileage May Vary",
            "Not Valid in Quebec",
            "Please Consult Your Doctor",
            "Your Childhood Imaginary Friend",
            "Who's not my real mum",
        ],
    ),
    (
        " of the ",
        &[
            "Flesh Cathedral",
            "Screaming Void",
            "Infinite Spreadsheet",
            "Forbidden Repository",
            "Haunted Codebase",
            "Eternal Standup",
            "Third-Floor Breakroom",
            "Unclosed Parenthesis",
            "Merge Conflict",
            "Sacred Timeline",
            "Forbidden Snack Drawer",
            "Lost Documentation",
            "Thousand Jira Tickets",
            "Unanswered Slack Messages",
            "Pending PRs",
        ],
    ),
];

/// The four separators, in table order.
pub const SEPARATORS: [&str; 4] = [" ", ", ", "—", " of the "];

/// A generated name: the short nickname and the decorated display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    pub first: String,
    pub full: String,
}

/// Pick a first name and a decorative suffix.
///
/// The separator group is chosen first, then a suffix within it, so each
/// separator style is equally likely regardless of group size.
pub fn generate_name() -> GeneratedName {
    let mut rng = rand::rng();

    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let (separator, suffixes) = SUFFIX_GROUPS[rng.random_range(0..SUFFIX_GROUPS.len())];
    let suffix = suffixes[rng.random_range(0..suffixes.len())];

    GeneratedName {
        first: first.to_string(),
        full: format!("{first}{separator}{suffix}"),
    }
}

/// Whether `name` appears in the first-name table.
pub fn is_first_name(name: &str) -> bool {
    FIRST_NAMES.contains(&name)
}
