//! Career-path players for the free-text question. `nfl_teams` and
//! `nfl_team_years` are parallel arrays (same length) describing the
//! stints in order.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerPathPlayer {
    pub name: &'static str,
    pub position: &'static str,
    pub college: &'static str,
    pub college_years: &'static str,
    pub nfl_teams: &'static [&'static str],
    pub nfl_team_years: &'static [&'static str],
    pub wrong_options: [&'static str; 3],
}

pub const CAREER_PATH_PLAYERS: &[CareerPathPlayer] = &[
    CareerPathPlayer {
        name: "Johnny Manziel",
        position: "QB",
        college: "Texas A&M",
        college_years: "2011-2013",
        nfl_teams: &["Browns"],
        nfl_team_years: &["2014-2015"],
        wrong_options: ["Baker Mayfield", "Ryan Tannehill", "Case Keenum"],
    },
    CareerPathPlayer {
        name: "Tom Brady",
        position: "QB",
        college: "Michigan",
        college_years: "1996-1999",
        nfl_teams: &["Patriots", "Buccaneers"],
        nfl_team_years: &["2000-2019", "2020-2022"],
        wrong_options: ["Peyton Manning", "Drew Brees", "Aaron Rodgers"],
    },
    CareerPathPlayer {
        name: "Peyton Manning",
        position: "QB",
        college: "Tennessee",
        college_years: "1994-1997",
        nfl_teams: &["Colts", "Broncos"],
        nfl_team_years: &["1998-2011", "2012-2015"],
        wrong_options: ["Eli Manning", "Philip Rivers", "Tom Brady"],
    },
    CareerPathPlayer {
        name: "Brett Favre",
        position: "QB",
        college: "Southern Miss",
        college_years: "1987-1990",
        nfl_teams: &["Falcons", "Packers", "Jets", "Vikings"],
        nfl_team_years: &["1991", "1992-2007", "2008", "2009-2010"],
        wrong_options: ["Aaron Rodgers", "Dan Marino", "Drew Bledsoe"],
    },
    CareerPathPlayer {
        name: "DeMarcus Ware",
        position: "OLB",
        college: "Troy",
        college_years: "2001-2004",
        nfl_teams: &["Cowboys", "Broncos"],
        nfl_team_years: &["2005-2013", "2014-2016"],
        wrong_options: ["Von Miller", "Terrell Suggs", "Julius Peppers"],
    },
    CareerPathPlayer {
        name: "Adrian Peterson",
        position: "RB",
        college: "Oklahoma",
        college_years: "2004-2006",
        nfl_teams: &["Vikings", "Saints", "Cardinals", "Washington"],
        nfl_team_years: &["2007-2016", "2017", "2017", "2018-2020"],
        wrong_options: ["Frank Gore", "Marshawn Lynch", "LeSean McCoy"],
    },
    CareerPathPlayer {
        name: "Randy Moss",
        position: "WR",
        college: "Marshall",
        college_years: "1996-1997",
        nfl_teams: &["Vikings", "Raiders", "Patriots", "Titans", "49ers"],
        nfl_team_years: &["1998-2004", "2005-2006", "2007-2010", "2010", "2012"],
        wrong_options: ["Terrell Owens", "Chad Johnson", "Steve Smith"],
    },
    CareerPathPlayer {
        name: "Larry Fitzgerald",
        position: "WR",
        college: "Pittsburgh",
        college_years: "2002-2003",
        nfl_teams: &["Cardinals"],
        nfl_team_years: &["2004-2020"],
        wrong_options: ["Anquan Boldin", "Andre Johnson", "Reggie Wayne"],
    },
    CareerPathPlayer {
        name: "Rob Gronkowski",
        position: "TE",
        college: "Arizona",
        college_years: "2007-2009",
        nfl_teams: &["Patriots", "Buccaneers"],
        nfl_team_years: &["2010-2018", "2020-2021"],
        wrong_options: ["Travis Kelce", "Jimmy Graham", "Antonio Gates"],
    },
    CareerPathPlayer {
        name: "Richard Sherman",
        position: "CB",
        college: "Stanford",
        college_years: "2006-2010",
        nfl_teams: &["Seahawks", "49ers", "Buccaneers"],
        nfl_team_years: &["2011-2017", "2018-2020", "2021"],
        wrong_options: ["Darrelle Revis", "Patrick Peterson", "Josh Norman"],
    },
    CareerPathPlayer {
        name: "Odell Beckham Jr.",
        position: "WR",
        college: "LSU",
        college_years: "2011-2013",
        nfl_teams: &["Giants", "Browns", "Rams", "Ravens"],
        nfl_team_years: &["2014-2018", "2019-2021", "2021", "2023"],
        wrong_options: ["Jarvis Landry", "Antonio Brown", "Mike Evans"],
    },
    CareerPathPlayer {
        name: "Emmitt Smith",
        position: "RB",
        college: "Florida",
        college_years: "1987-1989",
        nfl_teams: &["Cowboys", "Cardinals"],
        nfl_team_years: &["1990-2002", "2003-2004"],
        wrong_options: ["Barry Sanders", "Marshall Faulk", "Curtis Martin"],
    },
];
