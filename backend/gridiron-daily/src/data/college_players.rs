//! Player/college pairs for the college question. Each record carries its
//! own three wrong options so decoys stay era- and level-appropriate.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerCollege {
    pub name: &'static str,
    pub college: &'static str,
    pub wrong_options: [&'static str; 3],
}

pub const COLLEGE_PLAYERS: &[PlayerCollege] = &[
    PlayerCollege {
        name: "Johnny Manziel",
        college: "Texas A&M",
        wrong_options: ["Texas", "LSU", "Oklahoma"],
    },
    PlayerCollege {
        name: "Tom Brady",
        college: "Michigan",
        wrong_options: ["Ohio State", "Notre Dame", "Michigan State"],
    },
    PlayerCollege {
        name: "Aaron Rodgers",
        college: "California",
        wrong_options: ["Stanford", "UCLA", "Oregon"],
    },
    PlayerCollege {
        name: "Patrick Mahomes",
        college: "Texas Tech",
        wrong_options: ["Texas", "TCU", "Baylor"],
    },
    PlayerCollege {
        name: "Lamar Jackson",
        college: "Louisville",
        wrong_options: ["Kentucky", "Florida State", "Miami"],
    },
    PlayerCollege {
        name: "Joe Burrow",
        college: "LSU",
        wrong_options: ["Ohio State", "Alabama", "Auburn"],
    },
    PlayerCollege {
        name: "Justin Jefferson",
        college: "LSU",
        wrong_options: ["Alabama", "Ole Miss", "Mississippi State"],
    },
    PlayerCollege {
        name: "Davante Adams",
        college: "Fresno State",
        wrong_options: ["Boise State", "San Diego State", "Nevada"],
    },
    PlayerCollege {
        name: "Derrick Henry",
        college: "Alabama",
        wrong_options: ["Georgia", "Auburn", "Tennessee"],
    },
    PlayerCollege {
        name: "Christian McCaffrey",
        college: "Stanford",
        wrong_options: ["USC", "Oregon", "Washington"],
    },
    PlayerCollege {
        name: "Tyreek Hill",
        college: "West Alabama",
        wrong_options: ["Alabama", "Oklahoma State", "Georgia"],
    },
    PlayerCollege {
        name: "Josh Allen",
        college: "Wyoming",
        wrong_options: ["Montana", "Colorado State", "Boise State"],
    },
    PlayerCollege {
        name: "Russell Wilson",
        college: "Wisconsin",
        wrong_options: ["Michigan", "Nebraska", "Iowa"],
    },
    PlayerCollege {
        name: "Justin Herbert",
        college: "Oregon",
        wrong_options: ["Oregon State", "Washington", "California"],
    },
    PlayerCollege {
        name: "George Kittle",
        college: "Iowa",
        wrong_options: ["Iowa State", "Wisconsin", "Minnesota"],
    },
    PlayerCollege {
        name: "Cooper Kupp",
        college: "Eastern Washington",
        wrong_options: ["Washington State", "Idaho", "Montana"],
    },
];
