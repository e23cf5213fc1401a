//! Season statistical leaders. Yardage categories show bare names; TD,
//! sack and interception categories carry the stat value, which gets
//! rendered into the option strings.

use crate::models::question::SeasonCategory;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonLeaderRecord {
    pub year: u16,
    pub category: SeasonCategory,
    pub leader: &'static str,
    pub stat_value: Option<f64>,
    pub wrong_options: [(&'static str, Option<f64>); 3],
}

pub const SEASON_LEADERS: &[SeasonLeaderRecord] = &[
    SeasonLeaderRecord {
        year: 2012,
        category: SeasonCategory::Passing,
        leader: "Drew Brees",
        stat_value: None,
        wrong_options: [
            ("Matt Ryan", None),
            ("Tom Brady", None),
            ("Peyton Manning", None),
        ],
    },
    SeasonLeaderRecord {
        year: 2021,
        category: SeasonCategory::Passing,
        leader: "Tom Brady",
        stat_value: None,
        wrong_options: [
            ("Justin Herbert", None),
            ("Patrick Mahomes", None),
            ("Derek Carr", None),
        ],
    },
    SeasonLeaderRecord {
        year: 2023,
        category: SeasonCategory::Passing,
        leader: "Tua Tagovailoa",
        stat_value: None,
        wrong_options: [
            ("Jared Goff", None),
            ("Dak Prescott", None),
            ("Josh Allen", None),
        ],
    },
    SeasonLeaderRecord {
        year: 2020,
        category: SeasonCategory::Rushing,
        leader: "Derrick Henry",
        stat_value: None,
        wrong_options: [
            ("Dalvin Cook", None),
            ("Aaron Jones", None),
            ("Nick Chubb", None),
        ],
    },
    SeasonLeaderRecord {
        year: 2023,
        category: SeasonCategory::Rushing,
        leader: "Christian McCaffrey",
        stat_value: None,
        wrong_options: [
            ("Derrick Henry", None),
            ("Kyren Williams", None),
            ("Travis Etienne", None),
        ],
    },
    SeasonLeaderRecord {
        year: 2019,
        category: SeasonCategory::Receiving,
        leader: "Michael Thomas",
        stat_value: None,
        wrong_options: [
            ("Julio Jones", None),
            ("Chris Godwin", None),
            ("DeAndre Hopkins", None),
        ],
    },
    SeasonLeaderRecord {
        year: 2022,
        category: SeasonCategory::Receiving,
        leader: "Justin Jefferson",
        stat_value: None,
        wrong_options: [
            ("Tyreek Hill", None),
            ("Davante Adams", None),
            ("A.J. Brown", None),
        ],
    },
    SeasonLeaderRecord {
        year: 2006,
        category: SeasonCategory::PassingTds,
        leader: "Peyton Manning",
        stat_value: Some(31.0),
        wrong_options: [
            ("Drew Brees", Some(26.0)),
            ("Carson Palmer", Some(28.0)),
            ("Marc Bulger", Some(24.0)),
        ],
    },
    SeasonLeaderRecord {
        year: 2022,
        category: SeasonCategory::PassingTds,
        leader: "Patrick Mahomes",
        stat_value: Some(41.0),
        wrong_options: [
            ("Josh Allen", Some(35.0)),
            ("Joe Burrow", Some(35.0)),
            ("Kirk Cousins", Some(29.0)),
        ],
    },
    SeasonLeaderRecord {
        year: 2020,
        category: SeasonCategory::RushingTds,
        leader: "Derrick Henry",
        stat_value: Some(17.0),
        wrong_options: [
            ("Dalvin Cook", Some(16.0)),
            ("Alvin Kamara", Some(16.0)),
            ("David Montgomery", Some(8.0)),
        ],
    },
    SeasonLeaderRecord {
        year: 2023,
        category: SeasonCategory::RushingTds,
        leader: "Raheem Mostert",
        stat_value: Some(18.0),
        wrong_options: [
            ("Christian McCaffrey", Some(14.0)),
            ("Jahmyr Gibbs", Some(10.0)),
            ("Kyren Williams", Some(12.0)),
        ],
    },
    SeasonLeaderRecord {
        year: 2021,
        category: SeasonCategory::ReceivingTds,
        leader: "Cooper Kupp",
        stat_value: Some(16.0),
        wrong_options: [
            ("Davante Adams", Some(11.0)),
            ("Mike Evans", Some(14.0)),
            ("Deebo Samuel", Some(8.0)),
        ],
    },
    SeasonLeaderRecord {
        year: 2021,
        category: SeasonCategory::Sacks,
        leader: "T.J. Watt",
        stat_value: Some(22.5),
        wrong_options: [
            ("Robert Quinn", Some(18.5)),
            ("Myles Garrett", Some(16.0)),
            ("Cameron Jordan", Some(12.5)),
        ],
    },
    SeasonLeaderRecord {
        year: 2023,
        category: SeasonCategory::Sacks,
        leader: "T.J. Watt",
        stat_value: Some(19.0),
        wrong_options: [
            ("Micah Parsons", Some(14.0)),
            ("Khalil Mack", Some(17.0)),
            ("Danielle Hunter", Some(16.5)),
        ],
    },
    SeasonLeaderRecord {
        year: 2013,
        category: SeasonCategory::Interceptions,
        leader: "Richard Sherman",
        stat_value: Some(8.0),
        wrong_options: [
            ("Aqib Talib", Some(4.0)),
            ("Brandon Boykin", Some(6.0)),
            ("Tim Jennings", Some(4.0)),
        ],
    },
    SeasonLeaderRecord {
        year: 2021,
        category: SeasonCategory::Interceptions,
        leader: "Trevon Diggs",
        stat_value: Some(11.0),
        wrong_options: [
            ("J.C. Jackson", Some(8.0)),
            ("Xavien Howard", Some(5.0)),
            ("Kevin Byard", Some(5.0)),
        ],
    },
];
