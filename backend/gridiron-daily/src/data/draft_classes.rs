//! Top-10 pick lists per draft year. Source: Pro Football Reference draft
//! pages. Names use common display form.

/// One draft class: the year and its first ten selections in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftClass {
    pub year: u16,
    pub picks: [&'static str; 10],
}

pub const DRAFT_CLASSES: &[DraftClass] = &[
    DraftClass {
        year: 2018,
        picks: [
            "Baker Mayfield",
            "Saquon Barkley",
            "Sam Darnold",
            "Denzel Ward",
            "Bradley Chubb",
            "Quenton Nelson",
            "Josh Allen",
            "Roquan Smith",
            "Mike McGlinchey",
            "Josh Rosen",
        ],
    },
    DraftClass {
        year: 2020,
        picks: [
            "Joe Burrow",
            "Chase Young",
            "Jeff Okudah",
            "Andrew Thomas",
            "Tua Tagovailoa",
            "Justin Herbert",
            "Derrick Brown",
            "Isaiah Simmons",
            "C.J. Henderson",
            "Jedrick Wills",
        ],
    },
    DraftClass {
        year: 2021,
        picks: [
            "Trevor Lawrence",
            "Zach Wilson",
            "Trey Lance",
            "Kyle Pitts",
            "Ja'Marr Chase",
            "Jaylen Waddle",
            "Penei Sewell",
            "Jaycee Horn",
            "Patrick Surtain II",
            "DeVonta Smith",
        ],
    },
    DraftClass {
        year: 2022,
        picks: [
            "Travon Walker",
            "Aidan Hutchinson",
            "Derek Stingley Jr.",
            "Sauce Gardner",
            "Kayvon Thibodeaux",
            "Ikem Ekwonu",
            "Evan Neal",
            "Drake London",
            "Charles Cross",
            "Garrett Wilson",
        ],
    },
    DraftClass {
        year: 2023,
        picks: [
            "Bryce Young",
            "C.J. Stroud",
            "Will Anderson Jr.",
            "Anthony Richardson",
            "Devon Witherspoon",
            "Paris Johnson Jr.",
            "Tyree Wilson",
            "Bijan Robinson",
            "Jalen Carter",
            "Darnell Wright",
        ],
    },
    DraftClass {
        year: 2024,
        picks: [
            "Caleb Williams",
            "Jayden Daniels",
            "Drake Maye",
            "Marvin Harrison Jr.",
            "Joe Alt",
            "Malik Nabers",
            "JC Latham",
            "Michael Penix Jr.",
            "Rome Odunze",
            "J.J. McCarthy",
        ],
    },
];
