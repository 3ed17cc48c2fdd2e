//! Static copy for the about page and the video hub.
//!
//! These tables are editorial content, not league data, so they ship with
//! the binary instead of coming from the API.

pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

pub const ABOUT_INTRO: &str = "Kabaddi is a contact team sport played between two sides of seven. \
A raider crosses into the opposing half, tags as many defenders as possible, and returns \
without being tackled, all on a single breath.";

pub const ABOUT_FACTS: [Fact; 5] = [
    Fact { label: "Players per side", value: "7 on the mat, up to 12 in the squad" },
    Fact { label: "Match length", value: "Two halves of 20 minutes" },
    Fact { label: "Raid clock", value: "30 seconds per raid" },
    Fact { label: "All Out", value: "2 bonus points when a side clears the mat" },
    Fact { label: "Do-or-Die", value: "Third consecutive empty raid must score" },
];

pub struct Term {
    pub name: &'static str,
    pub meaning: &'static str,
}

pub const GLOSSARY: [Term; 5] = [
    Term { name: "Super Raid", meaning: "A raid that earns three or more points." },
    Term { name: "Super Tackle", meaning: "A tackle made with three or fewer defenders on the mat." },
    Term { name: "Bonus point", meaning: "Awarded when a raider crosses the bonus line with six or more defenders." },
    Term { name: "Super 10", meaning: "Ten or more raid points by one player in a match." },
    Term { name: "High 5", meaning: "Five or more tackle points by one player in a match." },
];

pub struct Video {
    pub title: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub url: &'static str,
}

pub const VIDEOS: [Video; 6] = [
    Video {
        title: "Season highlights",
        category: "Highlights",
        duration: "12:40",
        url: "https://www.youtube.com/results?search_query=kabaddi+league+highlights",
    },
    Video {
        title: "Top 10 Super Raids",
        category: "Top plays",
        duration: "8:15",
        url: "https://www.youtube.com/results?search_query=kabaddi+super+raid",
    },
    Video {
        title: "Top 10 Super Tackles",
        category: "Top plays",
        duration: "7:52",
        url: "https://www.youtube.com/results?search_query=kabaddi+super+tackle",
    },
    Video {
        title: "How a raid works",
        category: "Explainers",
        duration: "4:05",
        url: "https://www.youtube.com/results?search_query=how+to+play+kabaddi",
    },
    Video {
        title: "Final: extended highlights",
        category: "Highlights",
        duration: "22:10",
        url: "https://www.youtube.com/results?search_query=kabaddi+league+final",
    },
    Video {
        title: "Captains' press conference",
        category: "Interviews",
        duration: "15:30",
        url: "https://www.youtube.com/results?search_query=kabaddi+captains",
    },
];

/// Distinct video categories in table order.
#[must_use]
pub fn video_categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for v in &VIDEOS {
        if !out.contains(&v.category) {
            out.push(v.category);
        }
    }
    out
}

/// Videos in `category`, or all of them for `None`.
#[must_use]
pub fn videos_in(category: Option<&str>) -> Vec<&'static Video> {
    VIDEOS.iter().filter(|v| category.is_none_or(|c| v.category.eq_ignore_ascii_case(c))).collect()
}
